pub mod aggregator;
pub mod datetime;
pub mod entry;
pub mod fetcher;
pub mod image;
pub mod output;
pub mod parser;
pub mod text;
pub mod types;

pub use aggregator::{aggregate, fetch_source};
pub use entry::normalize_entry;
pub use fetcher::{FeedTransport, HttpTransport};
pub use image::resolve_image;
pub use output::{to_public, write_output};
pub use parser::parse_entries;
pub use text::{cleanse, summarize};
pub use types::*;

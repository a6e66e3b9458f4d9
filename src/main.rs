use anyhow::Context;
use clap::Parser;
use newsbrief::{aggregate, write_output};
use newsbrief::{FetchConfig, HttpTransport, PipelineConfig, SummaryLimit};
use std::path::PathBuf;
use tracing::info;

/// Fetch RSS/Atom feeds and write a compact, most-recent-first news JSON.
#[derive(Parser, Debug)]
#[command(name = "newsbrief", version)]
struct Cli {
    /// Feed URL to ingest; repeat for multiple sources
    #[arg(long = "feed", required = true)]
    feeds: Vec<String>,

    /// Output JSON path
    #[arg(long, default_value = "data/news.json")]
    output: PathBuf,

    /// Maximum number of items in the output
    #[arg(long, default_value_t = 60)]
    max_items: usize,

    /// Summary bound in words
    #[arg(long, default_value_t = 90)]
    summary_words: usize,

    /// Summary bound in characters (overrides the word bound)
    #[arg(long, conflicts_with = "summary_words")]
    summary_chars: Option<usize>,

    /// Per-request timeout in seconds for feed fetches
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Keep an RFC 3339 date field on each serialized item
    #[arg(long)]
    keep_dates: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let summary = match cli.summary_chars {
        Some(n) => SummaryLimit::Chars(n),
        None => SummaryLimit::Words(cli.summary_words),
    };
    let config = PipelineConfig {
        feeds: cli.feeds,
        max_items: cli.max_items,
        summary,
    };
    let fetch_config = FetchConfig {
        timeout_seconds: cli.timeout,
        ..FetchConfig::default()
    };

    info!("Fetching {} sources", config.feeds.len());
    let transport = HttpTransport::new(fetch_config);
    let items = aggregate(&transport, &config).await;

    write_output(&cli.output, &items, cli.keep_dates)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!("Wrote {} items to {}", items.len(), cli.output.display());
    Ok(())
}

use crate::types::{AggregatorError, RawEntry, Result};
use feed_rs::parser;
use tracing::debug;

/// Parse RSS/Atom content into loosely-typed raw entries.
pub fn parse_entries(content: &str) -> Result<Vec<RawEntry>> {
    let feed = parser::parse(content.as_bytes())
        .map_err(|e| AggregatorError::Parse(format!("Failed to parse feed: {}", e)))?;

    let entries: Vec<RawEntry> = feed.entries.into_iter().map(convert_entry).collect();
    debug!("Parsed feed with {} entries", entries.len());
    Ok(entries)
}

fn convert_entry(entry: feed_rs::model::Entry) -> RawEntry {
    let mut raw = RawEntry::new();

    if let Some(title) = entry.title {
        raw = raw.with_field("title", title.content);
    }
    if let Some(link) = entry.links.first() {
        raw = raw.with_field("link", link.href.clone());
    }
    for link in entry.links {
        raw = raw.with_link(link.href, link.rel, link.media_type);
    }

    if let Some(summary) = entry.summary {
        raw = raw.with_field("summary", summary.content);
    }
    if let Some(body) = entry.content.and_then(|c| c.body) {
        raw = raw.with_field("description", body);
    }

    if let Some(published) = entry.published {
        raw = raw.with_field("published", published.to_rfc3339());
    }
    if let Some(updated) = entry.updated {
        raw = raw.with_field("updated", updated.to_rfc3339());
    }

    for media in entry.media {
        for content in media.content {
            if let Some(url) = content.url {
                raw = raw.with_media_url(url.to_string());
            }
        }
        for thumbnail in media.thumbnails {
            raw = raw.with_media_url(thumbnail.image.uri.clone());
        }
    }

    raw
}

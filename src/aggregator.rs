use crate::entry::normalize_entry;
use crate::fetcher::FeedTransport;
use crate::parser::parse_entries;
use crate::types::{NewsItem, PipelineConfig, SummaryLimit};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Fetch and normalize one source. Any transport or parse failure degrades
/// to an empty list so a single flaky source never aborts the run.
pub async fn fetch_source(
    transport: &dyn FeedTransport,
    url: &str,
    limit: SummaryLimit,
) -> Vec<NewsItem> {
    let content = match transport.get_feed(url).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Skipping source {}: {}", url, e);
            return Vec::new();
        }
    };

    let entries = match parse_entries(&content) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping source {}: {}", url, e);
            return Vec::new();
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    for entry in &entries {
        if let Some(item) = normalize_entry(entry, transport, limit).await {
            items.push(item);
        }
    }
    debug!("Source {} yielded {} usable items", url, items.len());
    items
}

/// Merge all configured sources into one ordered, bounded collection.
///
/// Sources are fetched concurrently, but the result is deterministic for a
/// fixed source ordering: per-source lists are merged in configuration
/// order, duplicates by link are dropped first-seen-wins, and the stable
/// recency sort keeps merge order for equal timestamps.
pub async fn aggregate(transport: &dyn FeedTransport, config: &PipelineConfig) -> Vec<NewsItem> {
    let fetches = config
        .feeds
        .iter()
        .map(|url| fetch_source(transport, url, config.summary));
    let per_source = futures::future::join_all(fetches).await;

    let mut seen = HashSet::new();
    let mut merged: Vec<NewsItem> = Vec::new();
    for items in per_source {
        for item in items {
            if seen.insert(item.link.clone()) {
                merged.push(item);
            }
        }
    }

    merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    merged.truncate(config.max_items);

    info!(
        "Aggregated {} items from {} sources",
        merged.len(),
        config.feeds.len()
    );
    merged
}

use crate::datetime::entry_timestamp;
use crate::fetcher::FeedTransport;
use crate::image::resolve_image;
use crate::text::{cleanse, summarize};
use crate::types::{NewsItem, RawEntry, SummaryLimit};

const BODY_FIELDS: &[&str] = &["summary", "description"];

/// Transform one raw entry into the canonical record. Entries missing a
/// usable title or link after cleansing are unusable for deduplication and
/// display, so they are skipped rather than reported.
pub async fn normalize_entry(
    entry: &RawEntry,
    transport: &dyn FeedTransport,
    limit: SummaryLimit,
) -> Option<NewsItem> {
    let title = cleanse(entry.field_or_default("title"));
    let link = entry.field_or_default("link").to_string();
    if title.is_empty() || link.is_empty() {
        return None;
    }

    let body = BODY_FIELDS
        .iter()
        .filter_map(|key| entry.field(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or("");

    Some(NewsItem {
        title,
        description: summarize(body, limit),
        image: resolve_image(entry, transport).await,
        timestamp: entry_timestamp(entry),
        link,
    })
}

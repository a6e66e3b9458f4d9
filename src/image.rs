use crate::fetcher::FeedTransport;
use crate::types::RawEntry;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn og_image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<meta[^>]+property=["']og:image["'][^>]+content=["']([^"']+)["']"#)
            .expect("og:image pattern")
    })
}

// Some pages put content= before property=.
fn og_image_rev_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<meta[^>]+content=["']([^"']+)["'][^>]+property=["']og:image["']"#)
            .expect("og:image pattern")
    })
}

/// Pick a representative image URL for an entry, first from structured
/// media fields, then from enclosure/thumbnail link relations with an image
/// type, and finally by probing the linked article for its Open Graph
/// image. Every step is best-effort; nothing here ever propagates an error.
///
/// The page probe is one extra network request per entry without structured
/// image data, and is the dominant latency cost of the pipeline.
pub async fn resolve_image(entry: &RawEntry, transport: &dyn FeedTransport) -> Option<String> {
    if let Some(media) = entry.media().first() {
        return Some(media.url.clone());
    }

    for link in entry.links() {
        let rel_ok = matches!(link.rel.as_deref(), Some("enclosure") | Some("thumbnail"));
        let type_ok = link
            .media_type
            .as_deref()
            .map(|t| t.starts_with("image/") || t.starts_with("img/"))
            .unwrap_or(false);
        if rel_ok && type_ok {
            return Some(link.href.clone());
        }
    }

    let url = entry.field("link")?;
    match transport.get_page(url).await {
        Ok(html) => scan_og_image(&html),
        Err(e) => {
            debug!("og:image probe failed for {}: {}", url, e);
            None
        }
    }
}

fn scan_og_image(html: &str) -> Option<String> {
    og_image_re()
        .captures(html)
        .or_else(|| og_image_rev_re().captures(html))
        .map(|captures| captures[1].to_string())
}

use async_trait::async_trait;
use newsbrief::{AggregatorError, FeedTransport, Result};
use std::collections::HashMap;

/// In-memory transport: canned feed and page bodies keyed by URL, anything
/// else behaving like an unavailable upstream.
#[derive(Default)]
pub struct StubTransport {
    feeds: HashMap<String, String>,
    pages: HashMap<String, String>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, url: &str, body: &str) -> Self {
        self.feeds.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl FeedTransport for StubTransport {
    async fn get_feed(&self, url: &str) -> Result<String> {
        self.feeds
            .get(url)
            .cloned()
            .ok_or_else(|| AggregatorError::Status {
                code: 503,
                url: url.to_string(),
            })
    }

    async fn get_page(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| AggregatorError::Status {
                code: 404,
                url: url.to_string(),
            })
    }
}

/// Build a minimal RSS 2.0 document from (title, link, pubDate) triples.
pub fn rss_feed(items: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel><title>Test Feed</title>\
         <link>https://feed.example</link><description>fixture</description>",
    );
    for (title, link, pub_date) in items {
        xml.push_str(&format!(
            "<item><title>{}</title><link>{}</link>\
             <description>Body for {}</description><pubDate>{}</pubDate></item>",
            title, link, title, pub_date
        ));
    }
    xml.push_str("</channel></rss>");
    xml
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One raw item from a feed source before normalization.
///
/// Feed sources disagree wildly about which fields exist, so this is a
/// loosely-typed bag queried through get-or-default accessors rather than a
/// struct with required fields.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    fields: HashMap<String, String>,
    media: Vec<MediaRef>,
    links: Vec<LinkRef>,
    times: HashMap<String, StructuredTime>,
}

impl RawEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media.push(MediaRef { url: url.into() });
        self
    }

    pub fn with_link(
        mut self,
        href: impl Into<String>,
        rel: Option<String>,
        media_type: Option<String>,
    ) -> Self {
        self.links.push(LinkRef {
            href: href.into(),
            rel,
            media_type,
        });
        self
    }

    pub fn with_structured_time(mut self, key: &str, time: StructuredTime) -> Self {
        self.times.insert(key.to_string(), time);
        self
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn field_or_default(&self, key: &str) -> &str {
        self.field(key).unwrap_or("")
    }

    pub fn media(&self) -> &[MediaRef] {
        &self.media
    }

    pub fn links(&self) -> &[LinkRef] {
        &self.links
    }

    pub fn structured_time(&self, key: &str) -> Option<&StructuredTime> {
        self.times.get(key)
    }
}

/// Structured media attachment (media:content / media:thumbnail).
#[derive(Debug, Clone)]
pub struct MediaRef {
    pub url: String,
}

/// Link-relation metadata carried by an entry (enclosures, alternates, ...).
#[derive(Debug, Clone)]
pub struct LinkRef {
    pub href: String,
    pub rel: Option<String>,
    pub media_type: Option<String>,
}

/// A calendar/clock breakdown as some sources expose it, without any zone
/// information. Interpreted as already being on the UTC timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// The canonical, deduplication-ready record built from one raw entry.
/// Immutable once constructed; `link` is the dedup key and `timestamp` is
/// always UTC so any two records compare without conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// The shape served to consumers. `image` is serialized as `null` when no
/// resolution strategy succeeded; `date` is emitted only when configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Summary length policy: bounded by word count or by character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLimit {
    Words(usize),
    Chars(usize),
}

impl Default for SummaryLimit {
    fn default() -> Self {
        SummaryLimit::Words(90)
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub feeds: Vec<String>,
    pub max_items: usize,
    pub summary: SummaryLimit,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            feeds: Vec::new(),
            max_items: 60,
            summary: SummaryLimit::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub page_timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "newsbrief/0.1".to_string(),
            timeout_seconds: 10,
            page_timeout_seconds: 5,
            max_retries: 2,
            retry_delay_seconds: 2,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {code} for {url}")]
    Status { code: u16, url: String },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;

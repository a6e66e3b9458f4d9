use crate::types::{AggregatorError, FetchConfig, Result};
use async_trait::async_trait;
use backoff::{backoff::Backoff, exponential::ExponentialBackoff};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// The retrieval capability the pipeline depends on. Injected so
/// normalization and aggregation stay testable without real network access.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    /// Retrieve the body of a feed document.
    async fn get_feed(&self, url: &str) -> Result<String>;

    /// Best-effort retrieval of an article page for metadata scraping.
    async fn get_page(&self, url: &str) -> Result<String>;
}

/// reqwest-backed transport. Feed fetches retry with exponential backoff;
/// page fetches are single-shot under the shorter page timeout since they
/// only feed the best-effort image probe.
pub struct HttpTransport {
    client: Client,
    page_client: Client,
    config: FetchConfig,
}

impl HttpTransport {
    pub fn new(config: FetchConfig) -> Self {
        let client = Self::build_client(&config, config.timeout_seconds);
        let page_client = Self::build_client(&config, config.page_timeout_seconds);
        Self {
            client,
            page_client,
            config,
        }
    }

    fn build_client(config: &FetchConfig, timeout_seconds: u64) -> Client {
        Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .expect("Failed to create HTTP client")
    }

    async fn get_checked(client: &Client, url: &str) -> Result<String> {
        let parsed = Url::parse(url)?;
        let response = client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AggregatorError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl FeedTransport for HttpTransport {
    async fn get_feed(&self, url: &str) -> Result<String> {
        let mut backoff: ExponentialBackoff<backoff::SystemClock> = ExponentialBackoff {
            current_interval: Duration::from_secs(self.config.retry_delay_seconds),
            initial_interval: Duration::from_secs(self.config.retry_delay_seconds),
            max_interval: Duration::from_secs(self.config.retry_delay_seconds * 8),
            multiplier: 2.0,
            max_elapsed_time: Some(Duration::from_secs(self.config.retry_delay_seconds * 30)),
            ..Default::default()
        };

        let mut attempt = 0;
        loop {
            match Self::get_checked(&self.client, url).await {
                Ok(body) => {
                    debug!("Fetched feed {} ({} bytes)", url, body.len());
                    return Ok(body);
                }
                Err(e) if attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = backoff
                        .next_backoff()
                        .unwrap_or(Duration::from_secs(self.config.retry_delay_seconds));
                    warn!(
                        "Attempt {} failed for {}: {}, retrying in {:?}",
                        attempt, url, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_page(&self, url: &str) -> Result<String> {
        Self::get_checked(&self.page_client, url).await
    }
}

//! HTTP fetcher for the carrier's tracking page.
//!
//! One GET per lookup, no retry. The body comes back as text; it is HTML,
//! so no content negotiation is attempted.

use std::time::Duration;

use async_trait::async_trait;

use crate::parser::parse_events;
use crate::types::{TrackingError, TrackingEvent, TrackingResult};

/// Public tracking endpoint. The tracking number goes in the `cte` query parameter.
pub const DEFAULT_TRACKING_URL: &str = "https://www.jadlog.com.br/siteInstitucional/tracking_dev.jad";

/// Request timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

const TRACKING_QUERY_PARAM: &str = "cte";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                  AppleWebKit/537.36 (KHTML, like Gecko) \
                                  Chrome/131.0.0.0 Safari/537.36";

/// Anything that can return the raw tracking page for a tracking number.
#[async_trait]
pub trait TrackingSource: Send + Sync {
    async fn fetch(&self, track_number: &str) -> TrackingResult<String>;
}

/// Settings for [`TrackingFetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TRACKING_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Fetches tracking pages over HTTP with reqwest.
#[derive(Clone)]
pub struct TrackingFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl TrackingFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for TrackingFetcher {
    fn default() -> Self {
        Self::new(FetcherConfig::default())
    }
}

#[async_trait]
impl TrackingSource for TrackingFetcher {
    async fn fetch(&self, track_number: &str) -> TrackingResult<String> {
        tracing::debug!(url = %self.base_url, track_number, "Requesting tracking page");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[(TRACKING_QUERY_PARAM, track_number)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrackingError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        let body = resp.text().await?;
        tracing::debug!("Received {} bytes of tracking markup", body.len());
        Ok(body)
    }
}

/// Fetch the page for `track_number` and parse it into events.
pub async fn track<S>(source: &S, track_number: &str) -> TrackingResult<Vec<TrackingEvent>>
where
    S: TrackingSource + ?Sized,
{
    let markup = source.fetch(track_number).await?;
    parse_events(&markup)
}

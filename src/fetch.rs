//! HTTP access to tracker profile pages.

use std::time::Duration;
use tracing::debug;

use crate::error::{Result, ScrapeError};

pub const DEFAULT_BASE_URL: &str = "https://tracker.gg/valorant/profile/riot";

/// Client options. `None` leaves the reqwest default in place.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
    /// Pause before each request.
    pub delay: Duration,
}

pub struct TrackerClient {
    client: reqwest::Client,
    base_url: String,
    delay: Duration,
}

impl TrackerClient {
    pub fn new(base_url: impl Into<String>, options: FetchOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ScrapeError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            delay: options.delay,
        })
    }

    /// Overview page URL with the username percent-encoded as one path segment.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/{}/overview", self.base_url, urlencoding::encode(username))
    }

    /// GET the overview page and return its body.
    pub async fn fetch_profile_page(&self, username: &str) -> Result<String> {
        let url = self.profile_url(username);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        debug!("Fetching: {}", url);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(source) => return Err(ScrapeError::Network { url, source }),
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Http { url, status });
        }

        match resp.text().await {
            Ok(body) => Ok(body),
            Err(source) => Err(ScrapeError::Network { url, source }),
        }
    }
}

//! Client for the 12306 station list.

use std::time::Duration;

use tracing::{debug, info};

use super::error::StationError;
use super::names::{StationEntry, parse_station_names};

/// Default location of the station list.
pub const DEFAULT_STATION_URL: &str =
    "https://kyfw.12306.cn/otn/resources/js/framework/station_name.js";

/// Configuration for the station list client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// URL of `station_name.js`
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
}

impl StationClientConfig {
    /// Create a config pointing at the public station list.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_STATION_URL.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
        }
    }

    /// Set a custom URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Accept invalid TLS certificates.
    pub fn with_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the station list.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    /// Create a new station list client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The URL stations are fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and parse the full station list.
    pub async fn fetch_all(&self) -> Result<Vec<StationEntry>, StationError> {
        debug!(url = %self.url, "fetching station list");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        let stations = parse_station_names(&body);
        if stations.is_empty() {
            return Err(StationError::Empty);
        }

        info!(count = stations.len(), "fetched station list");
        Ok(stations)
    }
}

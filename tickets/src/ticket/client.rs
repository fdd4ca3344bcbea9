//! Left-ticket query HTTP client.

use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{StationCode, TravelDate};

use super::error::TicketError;
use super::types::QueryResponse;

/// Default base URL for the 12306 API.
pub const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn";

/// Default path of the query endpoint. 12306 occasionally renames it
/// (`queryA`, `queryZ`, ...), so it is configurable.
pub const DEFAULT_QUERY_PATH: &str = "otn/leftTicket/query";

/// Browser-like user agent; the API rejects requests without one.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) tickets/0.1";

/// How much of an unexpected body to keep in error messages.
const BODY_SNIPPET_CHARS: usize = 300;

/// Configuration for the ticket client.
#[derive(Debug, Clone)]
pub struct TicketClientConfig {
    /// Base URL for the API (defaults to production 12306)
    pub base_url: String,
    /// Path of the query endpoint, relative to `base_url`
    pub query_path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
}

impl TicketClientConfig {
    /// Create a config for the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query_path: DEFAULT_QUERY_PATH.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom query endpoint path.
    pub fn with_query_path(mut self, path: impl Into<String>) -> Self {
        self.query_path = path.into();
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

    fn query_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.query_path.trim_start_matches('/')
        )
    }
}

impl Default for TicketClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 12306 ticket availability client.
#[derive(Debug, Clone)]
pub struct TicketClient {
    http: reqwest::Client,
    query_url: String,
}

impl TicketClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TicketClientConfig) -> Result<Self, TicketError> {
        if config.base_url.is_empty() {
            return Err(TicketError::Config("base URL is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            query_url: config.query_url(),
        })
    }

    /// Fetch the raw train lines for one journey on one date.
    ///
    /// Returns the `data.result` strings in response order. An empty list
    /// means no trains run between the two stations that day.
    pub async fn query(
        &self,
        date: TravelDate,
        from: StationCode,
        to: StationCode,
    ) -> Result<Vec<String>, TicketError> {
        debug!(url = %self.query_url, %date, %from, %to, "querying tickets");

        let response = self
            .http
            .get(&self.query_url)
            .query(&[
                ("leftTicketDTO.train_date", date.to_string()),
                ("leftTicketDTO.from_station", from.to_string()),
                ("leftTicketDTO.to_station", to.to_string()),
                ("purpose_codes", "ADULT".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TicketError::Api {
                status: status.as_u16(),
                message: snippet(&body),
            });
        }

        let body = response.text().await?;

        let envelope: QueryResponse =
            serde_json::from_str(&body).map_err(|e| TicketError::Json {
                message: e.to_string(),
                body: Some(snippet(&body)),
            })?;

        let lines = unwrap_envelope(envelope)?;
        info!(trains = lines.len(), "received query result");
        Ok(lines)
    }
}

/// Extract `data.result`, turning refusals into errors.
fn unwrap_envelope(envelope: QueryResponse) -> Result<Vec<String>, TicketError> {
    if let Some(data) = envelope.data {
        return Ok(data.result);
    }

    if envelope.status == Some(false) {
        return Err(TicketError::Rejected {
            message: envelope
                .message_text()
                .unwrap_or_else(|| "no reason given".to_string()),
        });
    }

    Err(TicketError::Json {
        message: "response has no data field".to_string(),
        body: None,
    })
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}

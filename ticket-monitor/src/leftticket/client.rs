//! Left-ticket HTTP client.
//!
//! Provides the async query against the 12306 left-ticket endpoint and
//! unwraps the JSON envelope down to the raw record strings.

use chrono::NaiveDate;

use crate::domain::Telecode;
use crate::monitor::{CycleError, TicketSource};

use super::error::QueryError;
use super::types::QueryReply;

/// Default base URL for the 12306 ticketing host.
const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn";

/// Browser-like user agent; the endpoint refuses obviously
/// programmatic callers.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Configuration for the query client.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Base URL for the API (defaults to the production host)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-agent header sent with every request
    pub user_agent: String,
}

impl QueryConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the user-agent header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One route-and-date query.
///
/// Can only be built from resolved telecodes, so an unresolved station
/// name can never reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketQuery {
    /// Boarding station.
    pub from: Telecode,
    /// Alighting station.
    pub to: Telecode,
    /// Travel date.
    pub date: NaiveDate,
}

impl TicketQuery {
    /// Create a new query.
    pub fn new(from: Telecode, to: Telecode, date: NaiveDate) -> Self {
        Self { from, to, date }
    }
}

/// Left-ticket API client.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    base_url: String,
}

impl QueryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: QueryConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Query one day's left tickets for a route.
    ///
    /// Returns the raw per-train record strings from the envelope.
    pub async fn query(&self, query: &TicketQuery) -> Result<Vec<String>, QueryError> {
        let url = format!("{}/otn/leftTicket/queryZ", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                (
                    "leftTicketDTO.train_date",
                    query.date.format("%Y-%m-%d").to_string(),
                ),
                ("leftTicketDTO.from_station", query.from.to_string()),
                ("leftTicketDTO.to_station", query.to.to_string()),
                ("purpose_codes", "ADULT".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let reply: QueryReply = serde_json::from_str(&body).map_err(|e| QueryError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        reply_records(reply)
    }
}

/// Unwrap an envelope down to its record strings.
pub(crate) fn reply_records(reply: QueryReply) -> Result<Vec<String>, QueryError> {
    if reply.status == Some(false) {
        return Err(QueryError::Rejected {
            messages: reply.messages.to_text(),
        });
    }

    reply
        .data
        .and_then(|data| data.result)
        .ok_or(QueryError::MissingResult)
}

impl TicketSource for QueryClient {
    async fn fetch_batch(&self, query: &TicketQuery) -> Result<Vec<String>, CycleError> {
        self.query(query).await.map_err(|e| CycleError::Fetch {
            message: e.to_string(),
        })
    }
}

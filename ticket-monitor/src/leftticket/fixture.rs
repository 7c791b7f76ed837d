//! Fixture-backed ticket source for testing without API access.
//!
//! Loads a stored query envelope from a JSON file and serves its
//! records as if they came from the live endpoint.

use std::path::Path;

use crate::monitor::{CycleError, TicketSource};

use super::client::{TicketQuery, reply_records};
use super::error::QueryError;
use super::types::QueryReply;

/// Ticket source that replays a captured envelope from disk.
///
/// Useful for development and testing without hitting the real
/// endpoint. The shipped `data/queryZ.json` holds one full
/// Beijing-to-Changsha day of results.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    records: Vec<String>,
}

impl FixtureSource {
    /// Load a stored envelope from a JSON file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| QueryError::ApiError {
            status: 0,
            message: format!("failed to read fixture {:?}: {}", path, e),
        })?;

        let reply: QueryReply = serde_json::from_str(&json).map_err(|e| QueryError::Json {
            message: format!("failed to parse fixture {:?}: {}", path, e),
            body: None,
        })?;

        let records = reply_records(reply)?;

        Ok(Self { records })
    }

    /// Raw record strings in the fixture.
    pub fn records(&self) -> &[String] {
        &self.records
    }
}

impl TicketSource for FixtureSource {
    /// Serve the stored batch. The query is ignored; fixture data is
    /// static.
    async fn fetch_batch(&self, _query: &TicketQuery) -> Result<Vec<String>, CycleError> {
        Ok(self.records.clone())
    }
}

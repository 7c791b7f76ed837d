//! The polling loop.
//!
//! Fetches a batch, parses it, formats the report, prints it under a
//! local-time stamp, then waits out the polling interval. A failed
//! cycle is logged and the loop carries on with the next tick.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use chrono::Local;
use tokio::time::MissedTickBehavior;

use crate::domain::TrainRecord;
use crate::leftticket::{ParseError, TicketQuery, parse_batch};

use super::criteria::QueryCriteria;
use super::report::availability_report;

/// Error from one polling cycle.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CycleError {
    /// Failed to fetch the record batch
    #[error("failed to fetch left-ticket batch: {message}")]
    Fetch { message: String },

    /// A record in the batch could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Trait for fetching raw record batches.
///
/// This abstraction lets the monitor run against stored data in tests.
pub trait TicketSource {
    /// Fetch one day's raw record strings for a route.
    fn fetch_batch(
        &self,
        query: &TicketQuery,
    ) -> impl Future<Output = Result<Vec<String>, CycleError>> + Send;
}

/// Periodic availability monitor for one route and date.
pub struct Monitor<S: TicketSource> {
    source: S,
    criteria: QueryCriteria,
    query: TicketQuery,
    interval: Duration,
}

impl<S: TicketSource> Monitor<S> {
    /// Create a new monitor.
    pub fn new(source: S, criteria: QueryCriteria, query: TicketQuery, interval: Duration) -> Self {
        Self {
            source,
            criteria,
            query,
            interval,
        }
    }

    /// Fetch and parse one batch.
    pub async fn fetch_trains(&self) -> Result<HashMap<String, TrainRecord>, CycleError> {
        let raws = self.source.fetch_batch(&self.query).await?;
        Ok(parse_batch(&raws)?)
    }

    /// Run a single cycle and return the report text.
    pub async fn run_once(&self) -> Result<String, CycleError> {
        let trains = self.fetch_trains().await?;
        Ok(availability_report(&trains, &self.criteria))
    }

    /// Poll forever.
    ///
    /// The first cycle runs immediately; each later cycle waits out the
    /// full interval after the previous one finished.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match self.run_once().await {
                Ok(report) => print_stamped(&report),
                Err(e) => tracing::error!("polling cycle failed: {e}"),
            }
        }
    }
}

/// Print a report under a local-time stamp, the way the long-running
/// loop does.
pub fn print_stamped(report: &str) {
    println!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{report}");
}

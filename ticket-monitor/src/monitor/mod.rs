//! Availability monitoring.
//!
//! This module implements the polling loop that answers: "does any
//! train I care about still have the seats I care about, today?"
//!
//! Each cycle fetches one raw batch for the configured route and date,
//! parses it, and prints a line per watched train with tickets on sale.

mod criteria;
mod report;
mod watch;

pub use criteria::QueryCriteria;
pub use report::{NO_TICKETS, availability_report};
pub use watch::{CycleError, Monitor, TicketSource, print_stamped};

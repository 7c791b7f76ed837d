//! 12306 left-ticket query client.
//!
//! This module provides an HTTP client for the left-ticket endpoint of
//! the Chinese railway booking site, plus the parser for its record
//! format.
//!
//! Key characteristics of the endpoint:
//! - Each train comes back as **one pipe-delimited string**, not a JSON
//!   object; field meaning is positional and undocumented
//! - Seat columns hold `""` (class not offered), `无` (sold out), a
//!   count, or a code such as `有`
//! - Suspended trains keep placeholder times (`24:00`, `99:59`) and an
//!   `IS_TIME_NOT_BUY` marker in the booking column
//! - The server sometimes answers HTTP 200 with `"status": false` and
//!   a human-readable rejection in `messages`

mod client;
mod error;
mod fixture;
mod parse;
mod types;

pub use client::{QueryClient, QueryConfig, TicketQuery};
pub use error::QueryError;
pub use fixture::FixtureSource;
pub use parse::{ParseError, parse_batch, parse_record};
pub use types::{Messages, QueryReply, ReplyData};

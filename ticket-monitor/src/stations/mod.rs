//! Station name → telecode lookup.
//!
//! Provides display-name → telecode mapping, built at startup from the
//! 12306 station feed file and immutable afterwards.

mod error;
mod table;

pub use error::StationError;
pub use table::StationTable;

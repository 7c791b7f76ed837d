//! Domain types for the ticket monitor.
//!
//! This module contains the core domain model types that represent
//! validated 12306 data. Types that carry an invariant (station telecodes,
//! seat classes) enforce it at construction time, so code that receives
//! these types can trust their validity.

mod seat;
mod station;
mod train;

pub use seat::{Availability, SeatClass};
pub use station::{InvalidTelecode, Telecode};
pub use train::{TrainRecord, TrainType};

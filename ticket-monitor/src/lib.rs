//! 12306 left-ticket availability monitor.
//!
//! A polling tool that answers: "does any train I care about, on this
//! route and date, still have the seats I care about?"

pub mod config;
pub mod domain;
pub mod leftticket;
pub mod monitor;
pub mod stations;

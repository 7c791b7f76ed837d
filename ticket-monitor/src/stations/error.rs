//! Station table error types.

use std::path::PathBuf;

/// Errors that can occur while loading the station table.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The feed file could not be read
    #[error("cannot read station file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

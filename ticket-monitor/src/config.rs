//! Monitor configuration.
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! [route]
//! from = "北京西"
//! to = "长沙"
//! date = "2018-02-08"
//!
//! [watch]
//! interval_secs = 60
//! trains = ["K21"]
//! train_types = ["Z", "K"]
//! seat_classes = ["硬卧", "无座"]
//! ```
//!
//! Everything under `[watch]` is optional. Unknown train types and
//! seat classes are dropped with a warning; a selection that ends up
//! empty means "watch everything". Station names stay names here;
//! resolving them against the station table happens at startup.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{SeatClass, TrainType};
use crate::monitor::QueryCriteria;

/// Default and minimum seconds between polling cycles.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Error from loading a monitor configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected shape
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The travel date is not a calendar date
    #[error("invalid travel date {value:?}, expected YYYY-MM-DD")]
    BadDate { value: String },

    /// A required station name is empty
    #[error("config field {field} must name a station")]
    MissingStation { field: &'static str },
}

/// On-disk shape, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    route: RawRoute,
    #[serde(default)]
    watch: RawWatch,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    from: String,
    to: String,
    date: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawWatch {
    /// Accepted as an integer or a numeric string.
    interval_secs: Option<toml::Value>,
    #[serde(default)]
    trains: Vec<String>,
    #[serde(default)]
    train_types: Vec<String>,
    #[serde(default)]
    seat_classes: Vec<String>,
}

/// A validated monitor configuration.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Boarding station display name, e.g. 北京西.
    pub from: String,

    /// Alighting station display name.
    pub to: String,

    /// Travel date.
    pub date: NaiveDate,

    /// Seconds between polling cycles, never below
    /// [`DEFAULT_INTERVAL_SECS`].
    pub interval_secs: u64,

    /// Which trains and seat classes to watch.
    pub criteria: QueryCriteria,
}

impl MonitorConfig {
    /// Read and validate a config file.
    ///
    /// A leading BOM is tolerated; files saved on Windows often carry
    /// one.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let raw: RawConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let from = raw.route.from.trim().to_string();
        if from.is_empty() {
            return Err(ConfigError::MissingStation {
                field: "route.from",
            });
        }

        let to = raw.route.to.trim().to_string();
        if to.is_empty() {
            return Err(ConfigError::MissingStation { field: "route.to" });
        }

        let date = NaiveDate::parse_from_str(raw.route.date.trim(), "%Y-%m-%d").map_err(|_| {
            ConfigError::BadDate {
                value: raw.route.date.clone(),
            }
        })?;

        let trains: BTreeSet<String> = raw
            .watch
            .trains
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            from,
            to,
            date,
            interval_secs: interval_or_default(raw.watch.interval_secs.as_ref()),
            criteria: QueryCriteria::new(
                trains,
                parse_train_types(&raw.watch.train_types),
                parse_seat_classes(&raw.watch.seat_classes),
            ),
        })
    }
}

/// Coerce the configured interval.
///
/// Anything missing or malformed falls back to the default; anything
/// below it is raised to it, since hammering the endpoint gets the
/// caller blocked.
fn interval_or_default(value: Option<&toml::Value>) -> u64 {
    let Some(value) = value else {
        return DEFAULT_INTERVAL_SECS;
    };

    let parsed = match value {
        toml::Value::Integer(secs) => u64::try_from(*secs).ok(),
        toml::Value::String(secs) => secs.trim().parse::<u64>().ok(),
        _ => None,
    };

    match parsed {
        Some(secs) if secs >= DEFAULT_INTERVAL_SECS => secs,
        Some(secs) => {
            tracing::warn!(
                "polling every {secs}s risks getting blocked, using {DEFAULT_INTERVAL_SECS}s"
            );
            DEFAULT_INTERVAL_SECS
        }
        None => {
            tracing::warn!("cannot parse interval_secs {value}, using {DEFAULT_INTERVAL_SECS}s");
            DEFAULT_INTERVAL_SECS
        }
    }
}

fn parse_train_types(entries: &[String]) -> HashSet<TrainType> {
    let mut selected = HashSet::new();

    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match TrainType::parse(entry) {
            Some(tier) => {
                selected.insert(tier);
            }
            None => tracing::warn!("unknown train type {entry:?} in config, ignoring"),
        }
    }

    if selected.is_empty() {
        TrainType::ALL.into()
    } else {
        selected
    }
}

fn parse_seat_classes(entries: &[String]) -> HashSet<SeatClass> {
    let mut selected = HashSet::new();

    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match SeatClass::parse(entry) {
            Some(class) => {
                selected.insert(class);
            }
            None => tracing::warn!("unknown seat class {entry:?} in config, ignoring"),
        }
    }

    if selected.is_empty() {
        SeatClass::ALL.into()
    } else {
        selected
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    const FULL: &str = r#"
[route]
from = "北京西"
to = "长沙"
date = "2018-02-08"

[watch]
interval_secs = 90
trains = ["K21", "Z5"]
train_types = ["Z", "K"]
seat_classes = ["硬卧", "无座"]
"#;

    #[test]
    fn full_config_parses() {
        let file = write_config(FULL);
        let config = MonitorConfig::load(file.path()).unwrap();

        assert_eq!(config.from, "北京西");
        assert_eq!(config.to, "长沙");
        assert_eq!(config.date, NaiveDate::from_ymd_opt(2018, 2, 8).unwrap());
        assert_eq!(config.interval_secs, 90);
        assert_eq!(
            config.criteria.trains,
            ["K21".to_string(), "Z5".to_string()].into()
        );
        assert_eq!(
            config.criteria.train_types,
            [TrainType::Direct, TrainType::Fast].into()
        );
        assert_eq!(
            config.criteria.seat_classes,
            [SeatClass::HardSleeper, SeatClass::NoSeat].into()
        );
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let file = write_config(
            "[route]\nfrom = \"北京\"\nto = \"长沙\"\ndate = \"2018-02-08\"\n",
        );
        let config = MonitorConfig::load(file.path()).unwrap();

        assert_eq!(config.interval_secs, DEFAULT_INTERVAL_SECS);
        assert!(config.criteria.trains.is_empty());
        assert_eq!(config.criteria.train_types.len(), 6);
        assert_eq!(config.criteria.seat_classes.len(), 11);
    }

    #[test]
    fn interval_accepts_a_numeric_string() {
        let file = write_config(
            "[route]\nfrom = \"a\"\nto = \"b\"\ndate = \"2018-02-08\"\n[watch]\ninterval_secs = \"120\"\n",
        );
        assert_eq!(MonitorConfig::load(file.path()).unwrap().interval_secs, 120);
    }

    #[test]
    fn low_interval_is_raised_to_the_default() {
        let file = write_config(
            "[route]\nfrom = \"a\"\nto = \"b\"\ndate = \"2018-02-08\"\n[watch]\ninterval_secs = 5\n",
        );
        assert_eq!(
            MonitorConfig::load(file.path()).unwrap().interval_secs,
            DEFAULT_INTERVAL_SECS
        );
    }

    #[test]
    fn malformed_interval_falls_back_to_the_default() {
        for value in ["\"soon\"", "-30", "true"] {
            let file = write_config(&format!(
                "[route]\nfrom = \"a\"\nto = \"b\"\ndate = \"2018-02-08\"\n[watch]\ninterval_secs = {value}\n"
            ));
            assert_eq!(
                MonitorConfig::load(file.path()).unwrap().interval_secs,
                DEFAULT_INTERVAL_SECS,
                "interval_secs = {value}"
            );
        }
    }

    #[test]
    fn unknown_train_types_are_dropped() {
        let file = write_config(
            "[route]\nfrom = \"a\"\nto = \"b\"\ndate = \"2018-02-08\"\n[watch]\ntrain_types = [\"G\", \"X\"]\n",
        );
        let config = MonitorConfig::load(file.path()).unwrap();
        assert_eq!(config.criteria.train_types, [TrainType::HighSpeed].into());
    }

    #[test]
    fn wholly_invalid_type_selection_means_all_types() {
        let file = write_config(
            "[route]\nfrom = \"a\"\nto = \"b\"\ndate = \"2018-02-08\"\n[watch]\ntrain_types = [\"L\", \"\"]\n",
        );
        let config = MonitorConfig::load(file.path()).unwrap();
        assert_eq!(config.criteria.train_types.len(), 6);
    }

    #[test]
    fn unknown_seat_classes_are_dropped() {
        let file = write_config(
            "[route]\nfrom = \"a\"\nto = \"b\"\ndate = \"2018-02-08\"\n[watch]\nseat_classes = [\"硬卧\", \"按摩椅\"]\n",
        );
        let config = MonitorConfig::load(file.path()).unwrap();
        assert_eq!(
            config.criteria.seat_classes,
            [SeatClass::HardSleeper].into()
        );
    }

    #[test]
    fn empty_train_names_are_filtered() {
        let file = write_config(
            "[route]\nfrom = \"a\"\nto = \"b\"\ndate = \"2018-02-08\"\n[watch]\ntrains = [\"\", \" K21 \"]\n",
        );
        let config = MonitorConfig::load(file.path()).unwrap();
        assert_eq!(config.criteria.trains, ["K21".to_string()].into());
    }

    #[test]
    fn bad_date_is_fatal() {
        let file = write_config(
            "[route]\nfrom = \"a\"\nto = \"b\"\ndate = \"2018-13-40\"\n",
        );
        let err = MonitorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::BadDate { .. }));
    }

    #[test]
    fn empty_station_is_fatal() {
        let file = write_config(
            "[route]\nfrom = \"\"\nto = \"长沙\"\ndate = \"2018-02-08\"\n",
        );
        let err = MonitorConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingStation {
                field: "route.from"
            }
        ));
    }

    #[test]
    fn leading_bom_is_tolerated() {
        let file = write_config(&format!("\u{feff}{FULL}"));
        assert!(MonitorConfig::load(file.path()).is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-config.toml");

        let err = MonitorConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("no-such-config.toml"));
    }

    #[test]
    fn garbage_toml_is_parse_error() {
        let file = write_config("this is not toml [");
        let err = MonitorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

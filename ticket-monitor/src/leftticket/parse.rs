//! Conversion from raw left-ticket records to domain types.
//!
//! Each entry in the reply's `result` array is one train as a single
//! `|`-delimited string with a fixed positional layout. This module
//! extracts the fields the monitor cares about into [`TrainRecord`]s.
//! Parsing is fail-fast: a record that does not satisfy the layout fails
//! its whole batch, unlike the station table where malformed entries are
//! dropped silently.

use std::collections::HashMap;

use crate::domain::{Availability, SeatClass, Telecode, TrainRecord};

/// Error while parsing a raw record.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The record has fewer `|`-separated fields than the layout requires
    #[error("missing field {index} ({name})")]
    MissingField { index: usize, name: &'static str },

    /// A station-code field does not hold a valid telecode
    #[error("invalid telecode in field {index} ({name}): {value:?}")]
    InvalidTelecode {
        index: usize,
        name: &'static str,
        value: String,
    },
}

/// Parse one raw record into a [`TrainRecord`].
pub fn parse_record(raw: &str) -> Result<TrainRecord, ParseError> {
    let fields: Vec<&str> = raw.split('|').collect();

    let name = field(&fields, 3, "train name")?.to_string();
    let origin = telecode_field(&fields, 4, "origin")?;
    let terminus = telecode_field(&fields, 5, "terminus")?;
    let from_station = telecode_field(&fields, 6, "from station")?;
    let to_station = telecode_field(&fields, 7, "to station")?;
    let departure = field(&fields, 8, "departure time")?.to_string();
    let arrival = field(&fields, 9, "arrival time")?.to_string();
    let duration = field(&fields, 10, "duration")?.to_string();
    let start_date = field(&fields, 13, "travel date")?.to_string();
    let from_index = field(&fields, 16, "from-station route index")?.to_string();
    let to_index = field(&fields, 17, "to-station route index")?.to_string();

    let mut seats = HashMap::with_capacity(SeatClass::ALL.len());
    for class in SeatClass::ALL {
        let token = field(&fields, class.field_index(), class.label())?;
        seats.insert(class, Availability::parse(token));
    }

    Ok(TrainRecord {
        name,
        origin,
        terminus,
        from_station,
        to_station,
        departure,
        arrival,
        duration,
        start_date,
        from_index,
        to_index,
        seats,
    })
}

/// Parse a whole batch, keyed by train name.
///
/// The first bad record fails the batch. Within one batch, a later record
/// with a repeated name overwrites the earlier one.
pub fn parse_batch<I, S>(raws: I) -> Result<HashMap<String, TrainRecord>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut batch = HashMap::new();
    for raw in raws {
        let record = parse_record(raw.as_ref())?;
        batch.insert(record.name.clone(), record);
    }
    Ok(batch)
}

fn field<'a>(fields: &[&'a str], index: usize, name: &'static str) -> Result<&'a str, ParseError> {
    fields
        .get(index)
        .copied()
        .ok_or(ParseError::MissingField { index, name })
}

fn telecode_field(
    fields: &[&str],
    index: usize,
    name: &'static str,
) -> Result<Telecode, ParseError> {
    let value = field(fields, index, name)?;
    Telecode::parse(value).map_err(|_| ParseError::InvalidTelecode {
        index,
        name,
        value: value.to_string(),
    })
}

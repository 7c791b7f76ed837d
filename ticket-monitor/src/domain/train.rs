//! Train types: service tiers and parsed ticket records.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{Availability, SeatClass, Telecode};

/// The six known train service tiers, identified by the leading letter of a
/// train name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainType {
    /// G — 高铁, high-speed rail.
    HighSpeed,
    /// C — 城际, intercity.
    Intercity,
    /// D — 动车, EMU express.
    Emu,
    /// Z — 直达, direct express.
    Direct,
    /// T — 特快, express.
    Express,
    /// K — 快速, fast.
    Fast,
}

impl TrainType {
    /// All tiers, in customary G/C/D/Z/T/K order.
    pub const ALL: [TrainType; 6] = [
        TrainType::HighSpeed,
        TrainType::Intercity,
        TrainType::Emu,
        TrainType::Direct,
        TrainType::Express,
        TrainType::Fast,
    ];

    /// The prefix letter as it appears at the front of a train name.
    pub fn letter(&self) -> char {
        match self {
            TrainType::HighSpeed => 'G',
            TrainType::Intercity => 'C',
            TrainType::Emu => 'D',
            TrainType::Direct => 'Z',
            TrainType::Express => 'T',
            TrainType::Fast => 'K',
        }
    }

    /// Look up the tier for a prefix letter.
    pub fn from_letter(c: char) -> Option<TrainType> {
        TrainType::ALL.iter().copied().find(|t| t.letter() == c)
    }

    /// Parse a tier from a one-letter string, e.g. a config entry.
    pub fn parse(s: &str) -> Option<TrainType> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => TrainType::from_letter(c),
            _ => None,
        }
    }

    /// Whether a train name belongs to this tier.
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(self.letter())
    }
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One train's row of a left-ticket query result.
///
/// Times, travel date, and route indexes are kept verbatim from the feed:
/// suspended services carry placeholders such as "24:00" and "99:59" that
/// are not valid clock values.
#[derive(Debug, Clone)]
pub struct TrainRecord {
    /// Train name, e.g. "G485".
    pub name: String,
    /// Telecode of the train's full-route origin.
    pub origin: Telecode,
    /// Telecode of the train's full-route terminus.
    pub terminus: Telecode,
    /// Telecode of the boarding station for the queried window.
    pub from_station: Telecode,
    /// Telecode of the alighting station for the queried window.
    pub to_station: Telecode,
    /// Departure time at the boarding station, "HH:MM".
    pub departure: String,
    /// Arrival time at the alighting station, "HH:MM".
    pub arrival: String,
    /// Journey duration over the window, "HH:MM".
    pub duration: String,
    /// Travel date, "YYYYMMDD".
    pub start_date: String,
    /// 1-based position of the boarding station on the full route.
    pub from_index: String,
    /// 1-based position of the alighting station on the full route.
    pub to_index: String,
    /// Availability token per seat class.
    pub seats: HashMap<SeatClass, Availability>,
}

impl TrainRecord {
    /// Availability token for one class, if the record carries it.
    pub fn seat(&self, class: SeatClass) -> Option<&Availability> {
        self.seats.get(&class)
    }

    /// The classes from `selected` that have tickets right now, in
    /// canonical report order.
    pub fn available_classes(&self, selected: &HashSet<SeatClass>) -> Vec<SeatClass> {
        SeatClass::ALL
            .into_iter()
            .filter(|class| selected.contains(class))
            .filter(|class| self.seats.get(class).is_some_and(|a| a.has_tickets()))
            .collect()
    }

    /// The train's service tier, if the name carries a known prefix.
    /// Legacy all-digit train names have none.
    pub fn train_type(&self) -> Option<TrainType> {
        self.name.chars().next().and_then(TrainType::from_letter)
    }
}

//! Which trains a watch covers.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::{SeatClass, TrainRecord, TrainType};

/// What to watch: which trains, and which seat classes on them.
///
/// A non-empty `trains` list alone decides the candidates; the type
/// letters in `train_types` only apply when no names are listed. A
/// listed train is watched whatever its type.
#[derive(Debug, Clone)]
pub struct QueryCriteria {
    /// Explicitly watched train names (e.g. `G485`).
    pub trains: BTreeSet<String>,

    /// Train-type letters matched against train names when `trains`
    /// is empty.
    pub train_types: HashSet<TrainType>,

    /// Seat classes considered when reporting availability.
    pub seat_classes: HashSet<SeatClass>,
}

impl QueryCriteria {
    /// Create criteria from explicit parts.
    pub fn new(
        trains: BTreeSet<String>,
        train_types: HashSet<TrainType>,
        seat_classes: HashSet<SeatClass>,
    ) -> Self {
        Self {
            trains,
            train_types,
            seat_classes,
        }
    }

    /// Criteria that watch every train type and every seat class.
    pub fn watch_all() -> Self {
        Self {
            trains: BTreeSet::new(),
            train_types: TrainType::ALL.into(),
            seat_classes: SeatClass::ALL.into(),
        }
    }

    /// Pick the candidate trains out of a parsed batch, in name order.
    ///
    /// With a non-empty watch list, only the listed trains are
    /// candidates; a listed train missing from the batch is logged and
    /// skipped. Otherwise every train whose name carries a watched type
    /// letter is a candidate.
    pub fn select_candidates<'a>(
        &self,
        trains: &'a HashMap<String, TrainRecord>,
    ) -> Vec<&'a TrainRecord> {
        if !self.trains.is_empty() {
            return self
                .trains
                .iter()
                .filter_map(|name| {
                    let record = trains.get(name);
                    if record.is_none() {
                        tracing::warn!("watched train {name} not in this batch");
                    }
                    record
                })
                .collect();
        }

        let mut candidates: Vec<&TrainRecord> = trains
            .values()
            .filter(|record| self.train_types.iter().any(|t| t.matches(&record.name)))
            .collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        candidates
    }
}

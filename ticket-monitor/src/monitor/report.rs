//! Availability report formatting.

use std::collections::HashMap;

use crate::domain::TrainRecord;

use super::criteria::QueryCriteria;

/// The whole report when no candidate train has tickets.
pub const NO_TICKETS: &str = "no tickets available";

/// Format one batch into the report text.
///
/// One line per candidate train with tickets:
/// `<name> <comma-joined class labels> 有票\n`, classes in canonical
/// order. Candidates with nothing on sale produce no line. When no line
/// is produced at all, the report is exactly [`NO_TICKETS`].
pub fn availability_report(
    trains: &HashMap<String, TrainRecord>,
    criteria: &QueryCriteria,
) -> String {
    let mut report = String::new();

    for record in criteria.select_candidates(trains) {
        let classes = record.available_classes(&criteria.seat_classes);
        if classes.is_empty() {
            continue;
        }

        let labels: Vec<&str> = classes.iter().map(|class| class.label()).collect();
        report.push_str(&record.name);
        report.push(' ');
        report.push_str(&labels.join(","));
        report.push_str(" 有票\n");
    }

    if report.is_empty() {
        NO_TICKETS.to_string()
    } else {
        report
    }
}

use chrono::Weekday;

use super::model::{FilterSelection, TripRecord, TripTable};

// ---------------------------------------------------------------------------
// Month / day-of-week predicate
// ---------------------------------------------------------------------------

/// Whether a trip passes the selection's month and day restriction.
///
/// An absent restriction (`None`, i.e. "all") always passes.
pub fn matches(trip: &TripRecord, month: Option<u32>, day: Option<Weekday>) -> bool {
    month.map_or(true, |m| trip.month() == m) && day.map_or(true, |d| trip.weekday() == d)
}

/// Drop every trip outside the selection, keeping source order.
pub fn apply_filters(mut table: TripTable, selection: &FilterSelection) -> TripTable {
    if selection.month.is_some() || selection.day.is_some() {
        table
            .trips
            .retain(|trip| matches(trip, selection.month, selection.day));
    }
    table
}

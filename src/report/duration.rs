use std::io::{self, Write};

use super::{timed, EMPTY_SELECTION};
use crate::data::model::TripTable;

/// Printed when the selection has trips but none carries a duration.
pub const NO_DURATIONS: &str = "No trip duration data for this selection.";

/// Total and mean trip duration in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    pub total_secs: i64,
    pub mean_secs: i64,
}

impl DurationStats {
    /// Both values are truncated toward zero, never rounded.
    /// `None` for an empty input.
    pub fn compute(durations: &[f64]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }
        let total: f64 = durations.iter().sum();
        let mean = total / durations.len() as f64;
        Some(Self {
            total_secs: total.trunc() as i64,
            mean_secs: mean.trunc() as i64,
        })
    }
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    timed(out, "Calculating Trip Duration...", |out| {
        if table.is_empty() {
            return writeln!(out, "{EMPTY_SELECTION}");
        }
        // Blank durations are skipped, not counted as zero.
        let durations: Vec<f64> = table.trips.iter().filter_map(|t| t.duration_secs).collect();
        let Some(stats) = DurationStats::compute(&durations) else {
            return writeln!(out, "{NO_DURATIONS}");
        };
        writeln!(
            out,
            "The total trip duration was (in seconds): {}",
            stats.total_secs
        )?;
        writeln!(
            out,
            "The average trip duration was (in seconds): {}",
            stats.mean_secs
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{City, TripRecord};
    use chrono::NaiveDateTime;

    fn trip(duration_secs: Option<f64>) -> TripRecord {
        TripRecord {
            start_time: NaiveDateTime::parse_from_str("2017-05-01 10:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            start_station: "A".into(),
            end_station: "B".into(),
            duration_secs,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn sum_and_mean_are_truncated() {
        let stats = DurationStats::compute(&[10.0, 21.0]).unwrap();
        assert_eq!(stats.total_secs, 31);
        assert_eq!(stats.mean_secs, 15);

        // 10.5 truncates down rather than rounding up.
        let stats = DurationStats::compute(&[10.0, 11.0]).unwrap();
        assert_eq!(stats.total_secs, 21);
        assert_eq!(stats.mean_secs, 10);
    }

    #[test]
    fn fractional_durations_truncate() {
        let stats = DurationStats::compute(&[489.9, 300.8]).unwrap();
        assert_eq!(stats.total_secs, 790);
        assert_eq!(stats.mean_secs, 395);
    }

    #[test]
    fn blank_durations_are_skipped() {
        let table = TripTable::new(
            City::Washington,
            vec![trip(Some(10.0)), trip(None), trip(Some(11.0))],
        );
        let mut out = Vec::new();
        report(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The total trip duration was (in seconds): 21\n"));
        assert!(text.contains("The average trip duration was (in seconds): 10\n"));
    }

    #[test]
    fn trips_without_any_duration_are_reported() {
        let table = TripTable::new(City::Chicago, vec![trip(None), trip(None)]);
        let mut out = Vec::new();
        report(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(NO_DURATIONS));
        assert!(!text.contains(EMPTY_SELECTION));
    }

    #[test]
    fn empty_table_reports_no_data() {
        assert_eq!(DurationStats::compute(&[]), None);

        let table = TripTable::new(City::NewYorkCity, Vec::new());
        let mut out = Vec::new();
        report(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(EMPTY_SELECTION));
        assert!(!text.contains("total trip duration"));
    }
}

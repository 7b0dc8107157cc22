use std::io::{self, Write};

use chrono::Weekday;

use super::{timed, EMPTY_SELECTION};
use crate::data::model::{month_label, weekday_label, TripRecord, TripTable};
use crate::stats::mode;

/// Most frequent times of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based month.
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TimeStats {
    /// `None` when there are no trips.
    pub fn compute(trips: &[TripRecord]) -> Option<Self> {
        Some(Self {
            month: mode(trips.iter().map(TripRecord::month))?,
            weekday: mode(trips.iter().map(TripRecord::weekday))?,
            hour: mode(trips.iter().map(TripRecord::hour))?,
        })
    }
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    timed(out, "Calculating The Most Frequent Times of Travel...", |out| {
        let Some(stats) = TimeStats::compute(&table.trips) else {
            return writeln!(out, "{EMPTY_SELECTION}");
        };
        writeln!(out, "The most popular month was: {}", month_label(stats.month))?;
        writeln!(
            out,
            "The most popular day of week was: {}",
            weekday_label(stats.weekday)
        )?;
        writeln!(out, "The most popular start hour was: {}", stats.hour)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::City;
    use chrono::NaiveDateTime;

    fn trip(start: &str) -> TripRecord {
        TripRecord {
            start_time: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            start_station: "A".into(),
            end_station: "B".into(),
            duration_secs: Some(1.0),
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn picks_most_frequent_month_day_and_hour() {
        let trips = vec![
            trip("2017-01-02 08:10:00"), // Monday
            trip("2017-05-03 17:00:00"), // Wednesday
            trip("2017-05-10 17:30:00"), // Wednesday
            trip("2017-06-05 08:45:00"), // Monday
            trip("2017-06-07 17:05:00"), // Wednesday
        ];
        let stats = TimeStats::compute(&trips).unwrap();
        assert_eq!(stats.month, 5);
        assert_eq!(stats.weekday, Weekday::Wed);
        assert_eq!(stats.hour, 17);
    }

    #[test]
    fn prints_labels() {
        let table = TripTable::new(City::Chicago, vec![trip("2017-03-06 08:00:00")]);
        let mut out = Vec::new();
        report(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The most popular month was: March"));
        assert!(text.contains("The most popular day of week was: Monday"));
        assert!(text.contains("The most popular start hour was: 8"));
    }

    #[test]
    fn empty_table_reports_no_data() {
        let table = TripTable::new(City::Chicago, Vec::new());
        assert_eq!(TimeStats::compute(&table.trips), None);

        let mut out = Vec::new();
        report(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(EMPTY_SELECTION));
        assert!(!text.contains("most popular"));
    }
}

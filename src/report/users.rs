use std::io::{self, Write};

use super::{timed, write_counts, EMPTY_SELECTION};
use crate::data::model::TripTable;
use crate::stats::{mode, value_counts};

/// Birth-year aggregates over the non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

impl BirthYears {
    pub fn compute(years: &[i32]) -> Option<Self> {
        Some(Self {
            earliest: *years.iter().min()?,
            most_recent: *years.iter().max()?,
            most_common: mode(years.iter().copied())?,
        })
    }
}

/// Gender and birth-year breakdown, only for cities that record them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    pub birth_years: Option<BirthYears>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub demographics: Option<Demographics>,
}

impl UserStats {
    /// Demographics are computed only when the table's city has them,
    /// whatever the rows contain. Null values are not counted.
    pub fn compute(table: &TripTable) -> Self {
        let user_types = value_counts(table.trips.iter().filter_map(|t| t.user_type.clone()));

        let demographics = table.city.has_demographics().then(|| {
            let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
            Demographics {
                genders: value_counts(table.trips.iter().filter_map(|t| t.gender.clone())),
                birth_years: BirthYears::compute(&years),
            }
        });

        Self {
            user_types,
            demographics,
        }
    }
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    timed(out, "Calculating User Stats...", |out| {
        if table.is_empty() {
            return writeln!(out, "{EMPTY_SELECTION}");
        }
        let stats = UserStats::compute(table);
        write_counts(out, "User Type", &stats.user_types)?;

        let Some(demographics) = stats.demographics else {
            return Ok(());
        };
        writeln!(out)?;
        write_counts(out, "Gender", &demographics.genders)?;
        writeln!(out)?;
        match demographics.birth_years {
            Some(years) => {
                writeln!(out, "The earliest birth year was: {}", years.earliest)?;
                writeln!(out, "The most recent birth year was: {}", years.most_recent)?;
                writeln!(out, "The most popular birth year was: {}", years.most_common)
            }
            None => writeln!(out, "No birth year data for this selection."),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{City, TripRecord};
    use chrono::NaiveDateTime;

    fn trip(user_type: &str, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
        TripRecord {
            start_time: NaiveDateTime::parse_from_str("2017-02-14 09:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            start_station: "A".into(),
            end_station: "B".into(),
            duration_secs: Some(1.0),
            user_type: Some(user_type.into()),
            gender: gender.map(Into::into),
            birth_year,
        }
    }

    fn trips() -> Vec<TripRecord> {
        vec![
            trip("Subscriber", Some("Male"), Some(1985)),
            trip("Customer", None, None),
            trip("Subscriber", Some("Female"), Some(1992)),
            trip("Subscriber", Some("Male"), Some(1992)),
            trip("Customer", Some("Male"), Some(1949)),
        ]
    }

    #[test]
    fn counts_users_and_demographics() {
        let stats = UserStats::compute(&TripTable::new(City::Chicago, trips()));
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 2)]
        );

        let demo = stats.demographics.unwrap();
        assert_eq!(
            demo.genders,
            vec![("Male".to_string(), 3), ("Female".to_string(), 1)]
        );
        assert_eq!(
            demo.birth_years,
            Some(BirthYears {
                earliest: 1949,
                most_recent: 1992,
                most_common: 1992,
            })
        );
    }

    #[test]
    fn washington_never_reports_demographics() {
        // Even with gender data present in the rows.
        let table = TripTable::new(City::Washington, trips());
        let stats = UserStats::compute(&table);
        assert!(stats.demographics.is_none());

        let mut out = Vec::new();
        report(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("User Type counts:"));
        assert!(!text.contains("Gender"));
        assert!(!text.contains("birth year"));
    }

    #[test]
    fn missing_birth_years_are_reported() {
        let table = TripTable::new(City::NewYorkCity, vec![trip("Customer", None, None)]);
        let mut out = Vec::new();
        report(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Gender counts:"));
        assert!(text.contains("No birth year data for this selection."));
    }

    #[test]
    fn prints_birth_year_lines() {
        let mut out = Vec::new();
        report(&mut out, &TripTable::new(City::Chicago, trips())).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The earliest birth year was: 1949\n"));
        assert!(text.contains("The most recent birth year was: 1992\n"));
        assert!(text.contains("The most popular birth year was: 1992\n"));
    }

    #[test]
    fn empty_table_reports_no_data() {
        let mut out = Vec::new();
        report(&mut out, &TripTable::new(City::Chicago, Vec::new())).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(EMPTY_SELECTION));
        assert!(!text.contains("counts:"));
    }
}

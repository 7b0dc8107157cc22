use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use thiserror::Error;

// ---------------------------------------------------------------------------
// City – the fixed set of datasets
// ---------------------------------------------------------------------------

/// One of the cities a dataset is available for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown city '{0}' (expected chicago, new york city or washington)")]
pub struct ParseCityError(pub String);

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's dataset, relative to the data directory.
    pub fn default_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the city's source carries `Gender` and `Birth Year` columns.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = ParseCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|city| city.name() == s)
            .ok_or_else(|| ParseCityError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Calendar names
// ---------------------------------------------------------------------------

pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// 1-based month number for a lower-case month name.
pub fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}

pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    DAY_NAMES
        .iter()
        .position(|d| *d == name)
        .map(|i| WEEKDAYS[i])
}

/// English label for a 1-based month number, e.g. `3` → `"March"`.
pub fn month_label(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// FilterSelection – what the user asked to look at
// ---------------------------------------------------------------------------

/// A validated city plus optional month / day-of-week restriction.
/// `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    /// 1-based month.
    pub month: Option<u32>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    pub fn all(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.map(month_label).unwrap_or("all");
        let day = self.day.map(weekday_label).unwrap_or("all");
        write!(f, "{} (month: {month}, day: {day})", self.city)
    }
}

// ---------------------------------------------------------------------------
// TripRecord – one row of a city file
// ---------------------------------------------------------------------------

/// A single bikeshare trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Trip length in seconds. Some sources store fractional values;
    /// a blank cell is `None`.
    pub duration_secs: Option<f64>,
    pub user_type: Option<String>,
    /// Always `None` for cities without demographic columns.
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// 1-based month of the start time.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Start and end station joined as `"<start>, <end>"`.
    pub fn route(&self) -> String {
        format!("{}, {}", self.start_station, self.end_station)
    }
}

// ---------------------------------------------------------------------------
// TripTable – the loaded (and possibly filtered) trips of one city
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    pub trips: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, trips: Vec<TripRecord>) -> Self {
        Self { city, trips }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RawTable – unparsed source rows for the raw data viewer
// ---------------------------------------------------------------------------

/// A city file kept as text, every source column included.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<csv::StringRecord>,
}

impl RawTable {
    /// Rows `[start, start + len)`, clamped to the table end.
    pub fn slice(&self, start: usize, len: usize) -> &[csv::StringRecord] {
        let start = start.min(self.rows.len());
        let end = start.saturating_add(len).min(self.rows.len());
        &self.rows[start..end]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, info};
use serde::Deserialize;

use super::filter::apply_filters;
use super::model::{City, FilterSelection, RawTable, TripRecord, TripTable};
use crate::config::CityFiles;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Columns every city file must carry. `Gender` and `Birth Year` are optional.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

const START_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Load the selected city's trips and keep only those matching the
/// month / day restriction.
pub fn load_data(files: &CityFiles, selection: &FilterSelection) -> Result<TripTable, LoadError> {
    let table = load_trips(selection.city, files.path(selection.city))?;
    let total = table.len();
    let filtered = apply_filters(table, selection);
    info!("{selection}: kept {} of {total} trips", filtered.len());
    Ok(filtered)
}

// ---------------------------------------------------------------------------
// Typed trip loader
// ---------------------------------------------------------------------------

/// Row layout of a city CSV. Unlisted columns (the unnamed index,
/// `End Time`) are ignored.
#[derive(Debug, Deserialize)]
struct TripRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<f64>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Read every trip of a city file.
pub fn load_trips(city: City, path: &Path) -> Result<TripTable, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|col| !headers.iter().any(|h| h == *col))
    {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    let keep_demographics = city.has_demographics();
    let mut trips = Vec::new();

    for (idx, result) in reader.deserialize::<TripRow>().enumerate() {
        let record = idx + 1;
        let row = result.map_err(|source| LoadError::Record {
            path: path.to_path_buf(),
            record,
            source,
        })?;

        let start_time =
            parse_start_time(&row.start_time).ok_or_else(|| LoadError::StartTime {
                path: path.to_path_buf(),
                record,
                value: row.start_time.clone(),
            })?;

        let (gender, birth_year) = if keep_demographics {
            (row.gender, row.birth_year.map(|y| y as i32))
        } else {
            (None, None)
        };

        trips.push(TripRecord {
            start_time,
            start_station: row.start_station,
            end_station: row.end_station,
            duration_secs: row.trip_duration,
            user_type: row.user_type,
            gender,
            birth_year,
        });
    }

    debug!("read {} trips from {}", trips.len(), path.display());
    Ok(TripTable::new(city, trips))
}

fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

// ---------------------------------------------------------------------------
// Raw loader
// ---------------------------------------------------------------------------

/// Read a city file as text rows, for display only.
pub fn load_raw(path: &Path) -> Result<RawTable, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let rows = reader
        .records()
        .enumerate()
        .map(|(idx, result)| {
            result.map_err(|source| LoadError::Record {
                path: path.to_path_buf(),
                record: idx + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("read {} raw rows from {}", rows.len(), path.display());
    Ok(RawTable { headers, rows })
}

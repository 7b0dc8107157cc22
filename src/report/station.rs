use std::io::{self, Write};

use super::{timed, EMPTY_SELECTION};
use crate::data::model::{TripRecord, TripTable};
use crate::stats::mode;

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// `"<start>, <end>"` of the most frequent trip.
    pub route: String,
}

impl StationStats {
    /// `None` when there are no trips.
    pub fn compute(trips: &[TripRecord]) -> Option<Self> {
        Some(Self {
            start_station: mode(trips.iter().map(|t| t.start_station.as_str()))?.to_string(),
            end_station: mode(trips.iter().map(|t| t.end_station.as_str()))?.to_string(),
            route: mode(trips.iter().map(TripRecord::route))?,
        })
    }
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    timed(out, "Calculating The Most Popular Stations and Trip...", |out| {
        let Some(stats) = StationStats::compute(&table.trips) else {
            return writeln!(out, "{EMPTY_SELECTION}");
        };
        writeln!(out, "The most popular Start Station was: {}", stats.start_station)?;
        writeln!(out, "The most popular End Station was: {}", stats.end_station)?;
        writeln!(
            out,
            "The most popular Start and End Station combo was: {}",
            stats.route
        )
    })
}

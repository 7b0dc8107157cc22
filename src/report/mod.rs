/// Statistics reporters. Each one reads the filtered table and prints a
/// titled block followed by the elapsed time and a separator line.
///
/// ```text
///   TripTable ──► time ──► station ──► duration ──► users
/// ```

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Instant;

use crate::data::model::TripTable;

pub const SEPARATOR: &str = "----------------------------------------";

/// Printed instead of aggregates when the selection matched no trips.
pub const EMPTY_SELECTION: &str = "No trip data for this selection.";

/// Run every reporter in order: time, station, duration, users.
pub fn run_all<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    time::report(out, table)?;
    station::report(out, table)?;
    duration::report(out, table)?;
    users::report(out, table)
}

/// Print `title`, run `body`, then the timing footer and separator.
fn timed<W: Write>(
    out: &mut W,
    title: &str,
    body: impl FnOnce(&mut W) -> io::Result<()>,
) -> io::Result<()> {
    writeln!(out, "\n{title}\n")?;
    let start = Instant::now();
    body(out)?;
    writeln!(out, "\nThis took {} seconds.", start.elapsed().as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")
}

/// Print a frequency breakdown as an aligned two-column list.
fn write_counts<W: Write, T: Display>(
    out: &mut W,
    name: &str,
    counts: &[(T, usize)],
) -> io::Result<()> {
    let labels: Vec<String> = counts.iter().map(|(value, _)| value.to_string()).collect();
    let width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    writeln!(out, "{name} counts:")?;
    for (label, (_, count)) in labels.iter().zip(counts) {
        writeln!(out, "  {label:<width$}  {count}")?;
    }
    Ok(())
}

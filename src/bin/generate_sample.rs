//! Writes synthetic city files (`chicago.csv`, `new_york_city.csv`,
//! `washington.csv`) shaped like the real bikeshare exports.
//!
//! Usage: `generate_sample [OUTPUT_DIR] [TRIPS_PER_CITY]`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bikeshare_explorer::City;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Deterministic SplitMix64 stream; the same seed always yields the same files.
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Normal sample via Box-Muller.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Index into a table of `n` items, biased toward the front so that
    /// modes are well defined.
    fn skewed_index(&mut self, n: usize) -> usize {
        let u = self.next_f64();
        ((u * u) * n as f64) as usize % n
    }
}

const STATIONS: [[&str; 6]; 3] = [
    [
        "Streeter Dr & Grand Ave",
        "Clinton St & Washington Blvd",
        "Lake Shore Dr & Monroe St",
        "Canal St & Adams St",
        "Michigan Ave & Oak St",
        "Theater on the Lake",
    ],
    [
        "Pershing Square North",
        "E 17 St & Broadway",
        "W 21 St & 6 Ave",
        "West St & Chambers St",
        "Broadway & E 22 St",
        "8 Ave & W 31 St",
    ],
    [
        "Columbus Circle / Union Station",
        "Lincoln Memorial",
        "Jefferson Dr & 14th St SW",
        "Massachusetts Ave & Dupont Circle NW",
        "15th & P St NW",
        "Thomas Circle",
    ],
];

const USER_TYPES: [&str; 2] = ["Subscriber", "Customer"];
const GENDERS: [&str; 2] = ["Male", "Female"];

/// First half of 2017, the span covered by the real exports.
fn random_start(rng: &mut SimpleRng, year_start: NaiveDateTime) -> NaiveDateTime {
    let day = (rng.next_f64() * 181.0) as i64;
    let hour = rng.gauss(15.0, 4.0).clamp(0.0, 23.0) as i64;
    let second = (rng.next_f64() * 3600.0) as i64;
    year_start + Duration::days(day) + Duration::hours(hour) + Duration::seconds(second)
}

fn write_city(
    dir: &Path,
    city: City,
    stations: &[&str],
    trips: usize,
    rng: &mut SimpleRng,
) -> Result<()> {
    let path = dir.join(city.default_file());
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if city.has_demographics() {
        header.extend(["Gender", "Birth Year"]);
    }
    writer.write_record(&header)?;

    let year_start = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("invalid base date")?;

    for id in 0..trips {
        let start = random_start(rng, year_start);
        let duration = rng.gauss(6.5, 0.6).exp().max(60.0);
        let end = start + Duration::seconds(duration as i64);
        let start_station = stations[rng.skewed_index(stations.len())];
        let end_station = stations[rng.skewed_index(stations.len())];
        let user_type = USER_TYPES[rng.skewed_index(USER_TYPES.len())];

        let mut record = vec![
            id.to_string(),
            start.format("%Y-%m-%d %H:%M:%S").to_string(),
            end.format("%Y-%m-%d %H:%M:%S").to_string(),
            if city.has_demographics() {
                format!("{}", duration as i64)
            } else {
                format!("{duration:.3}")
            },
            start_station.to_string(),
            end_station.to_string(),
            user_type.to_string(),
        ];
        if city.has_demographics() {
            // Casual riders often leave demographics blank.
            if user_type == "Customer" && rng.next_f64() < 0.6 {
                record.extend([String::new(), String::new()]);
            } else {
                let gender = GENDERS[rng.skewed_index(GENDERS.len())];
                let birth_year = rng.gauss(1982.0, 10.0).clamp(1930.0, 2002.0).round();
                record.extend([gender.to_string(), format!("{birth_year:.1}")]);
            }
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Wrote {trips} trips to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let trips: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid trip count '{n}'"))?,
        None => 2000,
    };

    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    for (city, stations) in City::ALL.into_iter().zip(STATIONS.iter()) {
        write_city(&dir, city, stations, trips, &mut rng)?;
    }
    Ok(())
}

//! Command-line interface definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;

/// Explore US bikeshare trip data interactively
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// JSON file mapping city names to data files, overriding the defaults
    /// Example: {"washington": "dc_2017.csv"}
    #[arg(short, long)]
    pub cities: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

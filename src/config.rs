use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::cli::Args;
use crate::data::model::City;

// ---------------------------------------------------------------------------
// City → data file map
// ---------------------------------------------------------------------------

/// Immutable mapping from each city to its data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityFiles {
    files: BTreeMap<City, PathBuf>,
}

impl CityFiles {
    /// Default file names, resolved against `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        let files = City::ALL
            .into_iter()
            .map(|city| (city, data_dir.join(city.default_file())))
            .collect();
        Self { files }
    }

    /// Build the map from command-line arguments, applying the optional
    /// JSON override file.
    pub fn from_args(args: &Args) -> Result<Self> {
        let files = Self::new(&args.data_dir);
        match &args.cities {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading city file map {}", path.display()))?;
                files
                    .with_overrides(&args.data_dir, &text)
                    .with_context(|| format!("parsing city file map {}", path.display()))
            }
            None => Ok(files),
        }
    }

    /// Replace entries from a JSON object `{ "<city>": "<path>", ... }`.
    /// Relative paths resolve against `data_dir`.
    pub fn with_overrides(mut self, data_dir: &Path, json: &str) -> Result<Self> {
        let overrides: BTreeMap<String, PathBuf> =
            serde_json::from_str(json).context("expected a JSON object of city → path")?;

        for (name, path) in overrides {
            let city: City = name.parse()?;
            let path = if path.is_relative() {
                data_dir.join(path)
            } else {
                path
            };
            debug!("{city} data file overridden: {}", path.display());
            self.files.insert(city, path);
        }
        Ok(self)
    }

    /// Path of the city's data file.
    pub fn path(&self, city: City) -> &Path {
        // Every city is inserted by `new`.
        self.files[&city].as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_city_names() {
        let files = CityFiles::new(Path::new("data"));
        assert_eq!(files.path(City::Chicago), Path::new("data/chicago.csv"));
        assert_eq!(
            files.path(City::NewYorkCity),
            Path::new("data/new_york_city.csv")
        );
        assert_eq!(files.path(City::Washington), Path::new("data/washington.csv"));
    }

    #[test]
    fn overrides_replace_only_named_cities() {
        let files = CityFiles::new(Path::new("data"))
            .with_overrides(
                Path::new("data"),
                r#"{"washington": "dc.csv", "chicago": "/abs/chi.csv"}"#,
            )
            .unwrap();
        assert_eq!(files.path(City::Washington), Path::new("data/dc.csv"));
        assert_eq!(files.path(City::Chicago), Path::new("/abs/chi.csv"));
        assert_eq!(
            files.path(City::NewYorkCity),
            Path::new("data/new_york_city.csv")
        );
    }

    #[test]
    fn unknown_city_in_overrides_is_rejected() {
        let err = CityFiles::new(Path::new("."))
            .with_overrides(Path::new("."), r#"{"boston": "boston.csv"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("boston"));
    }

    #[test]
    fn from_args_reads_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("cities.json");
        std::fs::write(&map, r#"{"new york city": "nyc.csv"}"#).unwrap();

        let args = Args {
            data_dir: dir.path().to_path_buf(),
            cities: Some(map),
            verbose: false,
        };
        let files = CityFiles::from_args(&args).unwrap();
        assert_eq!(files.path(City::NewYorkCity), dir.path().join("nyc.csv"));
    }
}

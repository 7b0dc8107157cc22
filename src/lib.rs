//! Bikeshare Explorer: interactive statistics over US bikeshare trip data.
//!
//! A session asks for a city and optional month / day filters, loads the
//! matching trips, prints time, station, duration and user statistics and
//! then pages through raw rows on request.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod prompt;
pub mod report;
pub mod session;
pub mod stats;
pub mod viewer;

// Re-export public items for easier access
pub use cli::Args;
pub use config::CityFiles;
pub use data::loader::{load_data, load_raw, load_trips};
pub use data::model::{City, FilterSelection, TripRecord, TripTable};
pub use error::{LoadError, PromptError};
pub use prompt::Console;
pub use session::{Session, SessionState};

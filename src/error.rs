use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading a city data file. These are fatal for a session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read data file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}, record {record}: malformed row", path.display())]
    Record {
        path: PathBuf,
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("{}, record {record}: cannot parse start time '{value}'", path.display())]
    StartTime {
        path: PathBuf,
        record: usize,
        value: String,
    },
}

/// Failure while collecting an answer from the terminal.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end-of-file before a valid answer was given.
    #[error("input closed before a valid answer was given")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

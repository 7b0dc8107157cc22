use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use crate::config::CityFiles;
use crate::data::loader::{load_data, load_raw};
use crate::error::PromptError;
use crate::prompt::{get_filters, Console};
use crate::report;
use crate::viewer;

const RESTART_PROMPT: &str =
    "\nIf you would like to restart, enter yes. Otherwise, enter anything else.\n";

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Done,
}

/// One interactive exploration session: collect filters, load, report,
/// browse raw rows, then offer to start over.
pub struct Session<R, W> {
    files: CityFiles,
    console: Console<R, W>,
    completed: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(files: CityFiles, console: Console<R, W>) -> Self {
        Self {
            files,
            console,
            completed: 0,
        }
    }

    /// Loop until the user declines to restart. Returns the number of
    /// completed runs. Data file errors end the session.
    pub fn run(&mut self) -> Result<usize> {
        let mut state = SessionState::Running;
        while state == SessionState::Running {
            state = self.run_once()?;
        }
        Ok(self.completed)
    }

    /// A single pass through the pipeline; returns the next state.
    pub fn run_once(&mut self) -> Result<SessionState> {
        let selection = match get_filters(&mut self.console) {
            Ok(selection) => selection,
            Err(PromptError::Closed) => {
                info!("input closed, ending session");
                return Ok(SessionState::Done);
            }
            Err(err) => return Err(err.into()),
        };
        info!("exploring {selection}");

        let table = load_data(&self.files, &selection)?;
        report::run_all(self.console.out(), &table).context("writing report")?;

        let raw = load_raw(self.files.path(selection.city))?;
        viewer::browse(&mut self.console, &raw)?;
        self.completed += 1;

        if self.console.confirm(RESTART_PROMPT)? {
            Ok(SessionState::Running)
        } else {
            Ok(SessionState::Done)
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

//! Terminal prompts and the validated filter collection.

use std::io::{self, BufRead, Write};

use crate::data::model::{
    month_from_name, weekday_from_name, City, FilterSelection, DAY_NAMES, MONTH_NAMES,
};
use crate::error::PromptError;
use crate::report::SEPARATOR;

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

const CITY_PROMPT: &str =
    "Which city do you want to analyze? Choose from chicago, new york city, or washington: ";
const CITY_REJECTED: &str = "This is not a valid choice. Please try entering the city again.";

const MONTH_PROMPT: &str =
    "Which month do you want to analyze? If you want all months, enter ALL: ";
const MONTH_REJECTED: &str =
    "This is not a valid choice. Please try entering the month filter again.";

const DAY_PROMPT: &str = "Which day you want to analyze? If you want all days, enter ALL: ";
const DAY_REJECTED: &str = "This is not a valid choice. Please try entering the day filter again.";

const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Console – line-oriented prompt/answer I/O
// ---------------------------------------------------------------------------

/// Prompt/answer I/O over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for reports and tables.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one answer, trimmed and lower-cased.
    /// Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Ask until the answer is one of `choices`, printing `rejection`
    /// after every invalid answer. Returns the index of the chosen entry.
    pub fn choose(
        &mut self,
        prompt: &str,
        choices: &[&str],
        rejection: &str,
    ) -> Result<usize, PromptError> {
        loop {
            let answer = self.ask(prompt)?.ok_or(PromptError::Closed)?;
            if let Some(index) = choices.iter().position(|c| *c == answer) {
                return Ok(index);
            }
            writeln!(self.output, "{rejection}")?;
        }
    }

    /// `true` only when the answer is "yes". End of input counts as no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self.ask(prompt)?.is_some_and(|answer| answer == "yes"))
    }
}

// ---------------------------------------------------------------------------
// Filter collection
// ---------------------------------------------------------------------------

/// Ask for city, month and day, re-prompting until each is valid.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterSelection, PromptError> {
    writeln!(console.out(), "{GREETING}")?;

    let city_names: Vec<&str> = City::ALL.iter().map(|c| c.name()).collect();
    let city = City::ALL[console.choose(CITY_PROMPT, &city_names, CITY_REJECTED)?];

    let months: Vec<&str> = std::iter::once(ALL).chain(MONTH_NAMES).collect();
    let month = months[console.choose(MONTH_PROMPT, &months, MONTH_REJECTED)?];

    let days: Vec<&str> = std::iter::once(ALL).chain(DAY_NAMES).collect();
    let day = days[console.choose(DAY_PROMPT, &days, DAY_REJECTED)?];

    writeln!(console.out(), "{SEPARATOR}")?;

    Ok(FilterSelection {
        city,
        month: month_from_name(month),
        day: weekday_from_name(day),
    })
}

#![allow(clippy::module_inception)]

use std::{fmt::Display, io::Write, path::PathBuf, rc::Rc};

use crate::{
    config::Config, counter::counter::count_words, errors::errors::Error,
    reporter::reporter::report, source::lines::LineSource,
};

pub mod config;
pub mod counter;
pub mod errors;
pub mod lexer;
pub mod reporter;
pub mod source;

/// A line within a file. Line `0` marks errors that are not tied to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<PathBuf>);

impl Position {
    pub fn file(path: Rc<PathBuf>) -> Self {
        Position(0, path)
    }

    pub fn stdout() -> Self {
        Position(0, Rc::new(PathBuf::from("<stdout>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            write!(f, "{}", self.1.display())
        } else {
            write!(f, "{}:{}", self.1.display(), self.0)
        }
    }
}

/// Counts the words of `config.input` and writes the sorted report to `out`.
///
/// The whole file is counted before anything is written, so a failed run
/// leaves `out` untouched. Returns the number of report lines written.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize, Error> {
    tracing::info!("Counting words in {}", config.input.display());

    let lines = LineSource::open(&config.input)?;
    let counts = count_words(lines)?;

    tracing::debug!(
        distinct = counts.len(),
        total = counts.total(),
        "Finished counting"
    );

    report(&counts, out)
}

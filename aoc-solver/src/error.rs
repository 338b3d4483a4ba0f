//! Errors raised while registering, parsing and solving days

use std::fmt;
use thiserror::Error;

/// Puzzle text a day could not turn into its shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl ParseError {
    /// `InvalidFormat` keeping the whole context chain of an `anyhow` error
    pub fn invalid(err: impl fmt::Display) -> Self {
        ParseError::InvalidFormat(format!("{:#}", err))
    }
}

/// Why a part produced no answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The part is declared but has no logic yet
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Outside `1..=PARTS` for the day
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(String),
}

/// Failure to get an answer out of the registry
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for {year} day {day}")]
    NotFound { year: u16, day: u8 },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Solve(#[from] SolveError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Duplicate solver registration for {year} day {day}")]
    Duplicate { year: u16, day: u8 },
    #[error("Cannot register {year} day {day}: years start at 2015 and days run 1-25")]
    InvalidYearDay { year: u16, day: u8 },
}

//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Year/day outside what Advent of Code has
    #[error("{0}")]
    Usage(String),

    /// No day module registered for this year/day
    #[error(
        "No solver registered for {year} day {day}. Did you create the day module ({})? Run `aoc-new {year} {day}` to scaffold it.",
        .expected.display()
    )]
    SolverNotFound {
        year: u16,
        day: u8,
        expected: PathBuf,
    },

    /// Explicit `--input` path does not exist
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Default input path does not exist
    #[error(
        "Input file not found: {}. Run `aoc-new {year} {day}` to create it, then paste your puzzle input.",
        .path.display()
    )]
    DefaultInputNotFound { path: PathBuf, year: u16, day: u8 },

    /// Input exists but could not be read
    #[error("Failed to read input {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver error (parse failure, part not implemented, ...)
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Scaffolding template failed to load or render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Scaffolding could not write a file
    #[error("Failed to write {}: {source}", .path.display())]
    Scaffold {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<aoc_solver::SolveError> for CliError {
    fn from(e: aoc_solver::SolveError) -> Self {
        CliError::Solver(e.into())
    }
}

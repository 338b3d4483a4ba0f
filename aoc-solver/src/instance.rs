//! A day with its input parsed, timing the parse and every solve

use crate::error::{ParseError, SolveError};
use crate::solver::Solver;
use chrono::{TimeDelta, Utc};

/// One part's answer and how long solving it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub elapsed: TimeDelta,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_time: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_time) = timed(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_time,
        })
    }
}

/// A parsed day behind dynamic dispatch, as the registry hands it out
pub trait DynSolver {
    /// Solve `part`; anything outside `1..=parts()` is [`SolveError::PartOutOfRange`]
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_time(&self) -> TimeDelta;
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        if !(1..=S::PARTS).contains(&part) {
            return Err(SolveError::PartOutOfRange(part));
        }

        let (answer, elapsed) = timed(|| S::solve_part(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            elapsed,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }
}

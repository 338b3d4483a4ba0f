//! What a day module provides: one parser and a solver per part

use crate::error::{ParseError, SolveError};

/// Turns a day's puzzle text into the data both parts work from
///
/// Parsing happens once per run. `SharedData` may borrow from the input
/// (`&'a str`) or own everything.
pub trait AocParser {
    type SharedData<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError>;
}

/// Part `N` of a day
///
/// Parts take the shared data mutably, so part 2 can pick up whatever part 1 left
/// there. A part without logic returns [`SolveError::PartNotImplemented`].
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A day whose part is picked at runtime
///
/// Written by `#[derive(AocSolver)]` from the [`PartSolver`] impls. Callers go
/// through [`SolverInstance`](crate::SolverInstance), which only passes parts in
/// `1..=PARTS`.
pub trait Solver: AocParser {
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

//! Template day: part 1 sums one integer per line, part 2 doubles that sum.

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::ints;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["template", "easy"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = i64;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values: Vec<i64> = ints(input)
            .context("expected one integer per line")
            .map_err(ParseError::invalid)?;
        values
            .iter()
            .try_fold(0i64, |sum, &value| sum.checked_add(value))
            .ok_or_else(|| ParseError::InvalidFormat("sum of the lines overflows i64".into()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(sum: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(sum: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum.checked_mul(2)
            .map(|doubled| doubled.to_string())
            .ok_or_else(|| SolveError::SolveFailed("doubled sum overflows i64".into()))
    }
}

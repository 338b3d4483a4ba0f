//! Day-module contract and the registry the runner resolves days through
//!
//! A day implements [`AocParser`] once and [`PartSolver<N>`] for each part;
//! `#[derive(AocSolver)]` writes the [`Solver`] dispatch and
//! `#[derive(AutoRegisterSolver)]` submits the day to the plugin table.
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines().map(|l| l.parse().map_err(ParseError::invalid)).collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Err(SolveError::PartNotImplemented(2))
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2), Err(SolveError::PartNotImplemented(2)));
//! assert_eq!(solver.solve(3), Err(SolveError::PartOutOfRange(3)));
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, DayInfo, FIRST_YEAR, SolverFn, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder, instantiate, is_valid_year_day,
};
pub use solver::{AocParser, PartSolver, Solver};

// Re-exported for the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

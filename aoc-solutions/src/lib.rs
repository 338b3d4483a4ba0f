//! Advent of Code puzzle solutions with automatic registration
//!
//! Each day derives `AocSolver` and `AutoRegisterSolver`, so linking this crate is
//! enough for the runner's registry to find it. Shared parsing helpers live in
//! [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

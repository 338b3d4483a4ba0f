//! Runner and scaffolding for Advent of Code solvers
//!
//! `aoc` looks a day up in the solver registry, reads its input and prints the
//! answers; `aoc-new` creates the module, input and test files for a new day.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod layout;
pub mod logging;
pub mod output;
pub mod scaffold;

// Link aoc-solutions so its solver plugins are collected
use aoc_solutions as _;

use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use error::CliError;

/// Build the registry from every linked plugin carrying all of `tags`
pub fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

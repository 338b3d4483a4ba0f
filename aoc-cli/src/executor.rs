//! Runs the requested parts of one registered day

use crate::config::RunConfig;
use crate::error::CliError;
use crate::layout;
use crate::output::OutputFormatter;
use aoc_solver::SolverRegistry;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{debug, info};

/// Resolves a day in the registry and prints its answers
pub struct Executor {
    registry: SolverRegistry,
}

impl Executor {
    pub fn new(registry: SolverRegistry) -> Self {
        Self { registry }
    }

    /// Run every requested part in order, writing one line per part to `out`
    ///
    /// Lookup happens before the input is read, so a missing day fails without
    /// touching the filesystem or printing anything. The first failing part stops
    /// the run; parts printed before it stay printed.
    pub fn run<W: Write>(&self, config: &RunConfig, out: &mut W) -> Result<(), CliError> {
        let info = self
            .registry
            .info(config.year, config.day)
            .ok_or_else(|| CliError::SolverNotFound {
                year: config.year,
                day: config.day,
                expected: layout::day_module_path(
                    Path::new(layout::DEFAULT_SOLUTIONS_DIR),
                    config.year,
                    config.day,
                ),
            })?;

        let input = config.input.read()?;
        debug!(bytes = input.len(), "input loaded");

        let mut solver = self.registry.create_solver(config.year, config.day, &input)?;
        debug!(parse = %solver.parse_time(), "input parsed");

        let parts = requested_parts(config.part, info.parts);
        let formatter = OutputFormatter::new(config.part.is_none(), config.time);

        for part in parts {
            let result = solver.solve(part)?;
            info!(
                year = config.year,
                day = config.day,
                part,
                solve = %result.elapsed,
                "part solved"
            );
            formatter.write_result(out, &result)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// A single requested part, or every part the solver has
fn requested_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) => p..=p,
        None => 1..=max_parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_parts() {
        assert_eq!(requested_parts(None, 2), 1..=2);
        assert_eq!(requested_parts(Some(2), 2), 2..=2);
        assert_eq!(requested_parts(None, 1), 1..=1);
    }
}

//! Output formatting for solver results

use aoc_solver::SolveResult;
use chrono::TimeDelta;
use std::io::{self, Write};

/// Formats answers the way the runner prints them
///
/// Single-part runs print the bare answer; multi-part runs prefix `Part N: `.
/// With timing on, ` (<ms> ms)` follows the answer.
pub struct OutputFormatter {
    labelled: bool,
    timed: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(labelled: bool, timed: bool) -> Self {
        Self { labelled, timed }
    }

    /// Format a single result line (no newline)
    pub fn format_result(&self, result: &SolveResult) -> String {
        let mut line = String::new();
        if self.labelled {
            line.push_str(&format!("Part {}: ", result.part));
        }
        line.push_str(&result.answer);
        if self.timed {
            line.push_str(&format!(" ({})", format_millis(result.elapsed)));
        }
        line
    }

    /// Write a single result line
    pub fn write_result<W: Write>(&self, out: &mut W, result: &SolveResult) -> io::Result<()> {
        writeln!(out, "{}", self.format_result(result))
    }
}

/// Milliseconds with two decimals, e.g. `1.25 ms`
pub fn format_millis(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    format!("{:.2} ms", micros as f64 / 1000.0)
}

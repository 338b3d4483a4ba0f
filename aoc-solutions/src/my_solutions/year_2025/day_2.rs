//! Gift shop product IDs: sum the "invalid" IDs inside each range.
//!
//! An invalid ID is a digit string repeated exactly twice (`55`, `6464`, `123123`).
//! Rather than scanning every number in every range, all invalid IDs up to the
//! largest bound are generated directly from their repeated half and summed per
//! range with a prefix-sum lookup.

use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["ranges", "wip"])]
pub struct Solver;

/// Inclusive ID range with `low <= high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub low: u64,
    pub high: u64,
}

impl IdRange {
    /// Build a range, swapping the bounds if they are reversed
    pub fn new(a: u64, b: u64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

/// Sorted invalid IDs with running sums, for range-sum queries by binary search
#[derive(Debug, Clone, Default)]
pub struct InvalidIdIndex {
    ids: Vec<u64>,
    /// `prefix[i]` is the sum of `ids[..i]`
    prefix: Vec<u128>,
}

impl InvalidIdIndex {
    /// Every invalid ID `<= max`
    pub fn up_to(max: u64) -> Self {
        let mut ids = Vec::new();

        let max_half_len = decimal_len(max) / 2;
        for half_len in 1..=max_half_len {
            let Some(shift) = 10u64.checked_pow(half_len) else {
                break;
            };
            for half in shift / 10..shift {
                // Candidates grow with `half`, so the first one past `max` ends this length.
                match half.checked_mul(shift).and_then(|n| n.checked_add(half)) {
                    Some(id) if id <= max => ids.push(id),
                    _ => break,
                }
            }
        }
        ids.sort_unstable();

        let prefix = std::iter::once(0)
            .chain(ids.iter().scan(0u128, |sum, &id| {
                *sum += u128::from(id);
                Some(*sum)
            }))
            .collect();

        Self { ids, prefix }
    }

    /// The invalid IDs, ascending
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Sum of the invalid IDs in `range`
    pub fn sum_in(&self, range: IdRange) -> u128 {
        if self.ids.is_empty() {
            return 0;
        }
        let lower = self.ids.partition_point(|&id| id < range.low);
        let upper = self.ids.partition_point(|&id| id <= range.high);
        self.prefix[upper] - self.prefix[lower]
    }
}

fn decimal_len(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Largest accepted bound; its index holds just under a million IDs.
pub const MAX_ID: u64 = 999_999_999_999;

/// Parse comma-separated `low-high` tokens, ignoring all whitespace and empty tokens.
///
/// Bounds above [`MAX_ID`] are rejected.
pub fn parse_ranges(input: &str) -> anyhow::Result<Vec<IdRange>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    compact
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| -> anyhow::Result<IdRange> {
            let (low, high) = token
                .split_once('-')
                .ok_or_else(|| anyhow!("expected `low-high`, got {:?}", token))?;
            let low = low
                .parse()
                .with_context(|| format!("bad lower bound in {:?}", token))?;
            let high = high
                .parse()
                .with_context(|| format!("bad upper bound in {:?}", token))?;
            let range = IdRange::new(low, high);
            ensure!(
                range.high <= MAX_ID,
                "bound {} in {:?} is above the supported {}",
                range.high,
                token,
                MAX_ID
            );
            Ok(range)
        })
        .collect()
}

/// Total of the invalid IDs over all ranges; an ID in two ranges counts twice.
pub fn sum_invalid_ids(ranges: &[IdRange]) -> u128 {
    let Some(max) = ranges.iter().map(|r| r.high).max() else {
        return 0;
    };
    let index = InvalidIdIndex::up_to(max);
    ranges.iter().map(|&range| index.sum_in(range)).sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<IdRange>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_ranges(input).map_err(ParseError::invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(ranges: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid_ids(ranges).to_string())
    }
}

// TODO: part 2 needs the puzzle's second rule set before it can be written.
impl PartSolver<2> for Solver {
    fn solve(_ranges: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(2))
    }
}

//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Parts that cache an intermediate result in the shared data
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Cached;

struct CachedData {
    numbers: Vec<i64>,
    sorted: Option<Vec<i64>>,
}

impl AocParser for Cached {
    type SharedData<'a> = CachedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = SumProduct::parse(input)?;
        Ok(CachedData { numbers, sorted: None })
    }
}

fn sorted(shared: &mut CachedData) -> &[i64] {
    shared.sorted.get_or_insert_with(|| {
        let mut sorted = shared.numbers.clone();
        sorted.sort_unstable();
        sorted
    })
}

impl PartSolver<1> for Cached {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sorted(shared).first().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<2> for Cached {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sorted(shared).last().copied().unwrap_or_default().to_string())
    }
}

fn join(numbers: &[i64]) -> String {
    numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(N)` is the same as calling `PartSolver<N>` directly
    #[test]
    fn solve_part_dispatches_to_part_solver(
        numbers in prop::collection::vec(1i64..10, 1..6),
        part in 1u8..=2
    ) {
        let input = join(&numbers);
        let mut shared1 = SumProduct::parse(&input).unwrap();
        let mut shared2 = SumProduct::parse(&input).unwrap();

        let dispatched = SumProduct::solve_part(&mut shared1, part).unwrap();
        let direct = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut shared2),
            2 => <SumProduct as PartSolver<2>>::solve(&mut shared2),
            _ => unreachable!(),
        }
        .unwrap();

        prop_assert_eq!(dispatched, direct);
    }

    /// Any part the attribute does not cover is reported as not implemented
    #[test]
    fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1\n2\n3").unwrap();

        match SumProduct::solve_part(&mut shared, invalid_part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }

    /// Parts sharing cached state agree with a fresh computation, in either order
    #[test]
    fn cached_state_is_consistent(numbers in prop::collection::vec(-50i64..50, 1..20)) {
        let input = join(&numbers);
        let min = numbers.iter().min().unwrap().to_string();
        let max = numbers.iter().max().unwrap().to_string();

        let mut forward = Cached::parse(&input).unwrap();
        prop_assert_eq!(Cached::solve_part(&mut forward, 1).unwrap(), min.clone());
        prop_assert_eq!(Cached::solve_part(&mut forward, 2).unwrap(), max.clone());

        let mut backward = Cached::parse(&input).unwrap();
        prop_assert_eq!(Cached::solve_part(&mut backward, 2).unwrap(), max);
        prop_assert_eq!(Cached::solve_part(&mut backward, 1).unwrap(), min);
    }
}

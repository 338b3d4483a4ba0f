use aoc_solver::{
    AocParser, AocSolver, DayInfo, ParseError, PartSolver, RegistrationError, SolveError,
    SolverError, SolverRegistryBuilder,
};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("empty input".to_string()));
        }
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for LineCount {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(2))
    }
}

#[test]
fn test_create_and_solve() {
    let registry = SolverRegistryBuilder::new()
        .register::<LineCount>(2024, 3)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2024, 3, "a\nb").unwrap();
    assert_eq!(solver.year(), 2024);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);

    let result = solver.solve(1).unwrap();
    assert_eq!(result.part, 1);
    assert_eq!(result.answer, "2");
    assert!(result.elapsed >= chrono::TimeDelta::zero());
    assert!(solver.parse_time() >= chrono::TimeDelta::zero());
}

#[test]
fn test_not_implemented_and_out_of_range_are_distinct() {
    let registry = SolverRegistryBuilder::new()
        .register::<LineCount>(2024, 3)
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2024, 3, "a").unwrap();

    assert_eq!(solver.solve(2), Err(SolveError::PartNotImplemented(2)));
    assert_eq!(solver.solve(3), Err(SolveError::PartOutOfRange(3)));
    assert_eq!(solver.solve(0), Err(SolveError::PartOutOfRange(0)));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<LineCount>(2024, 3)
        .unwrap()
        .register::<LineCount>(2024, 3);

    assert!(matches!(
        result,
        Err(RegistrationError::Duplicate { year: 2024, day: 3 })
    ));
}

#[test]
fn test_impossible_dates_rejected() {
    let result = SolverRegistryBuilder::new().register::<LineCount>(2014, 1);
    assert!(matches!(
        result,
        Err(RegistrationError::InvalidYearDay { year: 2014, day: 1 })
    ));

    let result = SolverRegistryBuilder::new().register::<LineCount>(2024, 26);
    assert!(matches!(
        result,
        Err(RegistrationError::InvalidYearDay { year: 2024, day: 26 })
    ));
}

#[test]
fn test_any_later_year_registers() {
    let registry = SolverRegistryBuilder::new()
        .register::<LineCount>(2035, 1)
        .unwrap()
        .register::<LineCount>(2100, 25)
        .unwrap()
        .build();

    assert!(registry.contains(2035, 1));
    let mut solver = registry.create_solver(2100, 25, "x\ny\nz").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}

#[test]
fn test_lookup_errors() {
    let registry = SolverRegistryBuilder::new()
        .register::<LineCount>(2024, 3)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2024, 4, "x"),
        Err(SolverError::NotFound { year: 2024, day: 4 })
    ));
    assert!(matches!(
        registry.create_solver(2024, 0, "x"),
        Err(SolverError::NotFound { year: 2024, day: 0 })
    ));
    assert!(matches!(
        registry.create_solver(2024, 3, ""),
        Err(SolverError::Parse(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_iterates_in_year_day_order() {
    let registry = SolverRegistryBuilder::new()
        .register::<LineCount>(2025, 1)
        .unwrap()
        .register::<LineCount>(2016, 20)
        .unwrap()
        .register::<LineCount>(2016, 2)
        .unwrap()
        .build();

    let keys: Vec<(u16, u8)> = registry.iter().map(|info| (info.year, info.day)).collect();
    assert_eq!(keys, vec![(2016, 2), (2016, 20), (2025, 1)]);
    assert_eq!(
        registry.info(2016, 20),
        Some(DayInfo {
            year: 2016,
            day: 20,
            parts: 2
        })
    );
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
}

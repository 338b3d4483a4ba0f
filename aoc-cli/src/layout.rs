//! Where day modules, inputs and tests live on disk
//!
//! The runner and the scaffolder both derive paths from here, so the location the
//! runner names in a "not found" error is the one `aoc-new` creates.

use crate::error::CliError;
use aoc_solver::{DAYS_PER_YEAR, FIRST_YEAR};
use std::path::{Path, PathBuf};

/// Solutions crate, relative to the workspace root
pub const DEFAULT_SOLUTIONS_DIR: &str = "aoc-solutions";
/// Puzzle inputs root, relative to the working directory
pub const DEFAULT_INPUTS_DIR: &str = "inputs";

/// Reject years before the first event and days outside 1-25
///
/// Accepts exactly what the solver registry accepts, so any day scaffolded here
/// can be registered.
pub fn validate_year_day(year: u16, day: u8) -> Result<(), CliError> {
    if year < FIRST_YEAR {
        return Err(CliError::Usage(format!(
            "Year must be {} or later (got {})",
            FIRST_YEAR, year
        )));
    }
    if !(1..=DAYS_PER_YEAR).contains(&day) {
        return Err(CliError::Usage(format!(
            "Day must be between 1 and {} (got {})",
            DAYS_PER_YEAR, day
        )));
    }
    Ok(())
}

/// `<solutions>/src/my_solutions`
pub fn solutions_root(solutions_dir: &Path) -> PathBuf {
    solutions_dir.join("src").join("my_solutions")
}

/// `<solutions>/src/my_solutions/mod.rs`, which declares the year modules
pub fn solutions_mod_file(solutions_dir: &Path) -> PathBuf {
    solutions_root(solutions_dir).join("mod.rs")
}

/// `year_<year>`
pub fn year_module_name(year: u16) -> String {
    format!("year_{}", year)
}

/// `day_<day>`
pub fn day_module_name(day: u8) -> String {
    format!("day_{}", day)
}

/// `<solutions>/src/my_solutions/year_<year>`
pub fn year_dir(solutions_dir: &Path, year: u16) -> PathBuf {
    solutions_root(solutions_dir).join(year_module_name(year))
}

/// `<solutions>/src/my_solutions/year_<year>/mod.rs`, which declares the day modules
pub fn year_mod_file(solutions_dir: &Path, year: u16) -> PathBuf {
    year_dir(solutions_dir, year).join("mod.rs")
}

/// `<solutions>/src/my_solutions/year_<year>/day_<day>.rs`
pub fn day_module_path(solutions_dir: &Path, year: u16, day: u8) -> PathBuf {
    year_dir(solutions_dir, year).join(format!("{}.rs", day_module_name(day)))
}

/// `<inputs>/<year>/day<DD>.txt`
pub fn default_input_path(inputs_dir: &Path, year: u16, day: u8) -> PathBuf {
    inputs_dir
        .join(year.to_string())
        .join(format!("day{:02}.txt", day))
}

/// `<solutions>/tests/day<DD>.rs` (not namespaced by year)
pub fn test_file_path(solutions_dir: &Path, day: u8) -> PathBuf {
    solutions_dir.join("tests").join(format!("day{:02}.rs", day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let solutions = Path::new("aoc-solutions");
        assert_eq!(
            day_module_path(solutions, 2025, 3),
            Path::new("aoc-solutions/src/my_solutions/year_2025/day_3.rs")
        );
        assert_eq!(
            year_mod_file(solutions, 2025),
            Path::new("aoc-solutions/src/my_solutions/year_2025/mod.rs")
        );
        assert_eq!(
            test_file_path(solutions, 3),
            Path::new("aoc-solutions/tests/day03.rs")
        );
        assert_eq!(
            default_input_path(Path::new("inputs"), 2025, 3),
            Path::new("inputs/2025/day03.txt")
        );
    }

    #[test]
    fn test_validate_year_day() {
        assert!(validate_year_day(2015, 1).is_ok());
        assert!(validate_year_day(2025, 25).is_ok());
        // Anything accepted here must be registrable
        assert!(validate_year_day(2035, 1).is_ok());
        assert!(aoc_solver::is_valid_year_day(2035, 1));

        let err = validate_year_day(2014, 1).unwrap_err();
        assert!(err.to_string().contains("2015 or later"));

        let err = validate_year_day(2025, 0).unwrap_err();
        assert!(err.to_string().contains("between 1 and 25"));
        assert!(validate_year_day(2025, 26).is_err());
    }
}

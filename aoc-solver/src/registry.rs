//! (year, day) lookup for every linked day module
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through `inventory`;
//! [`SolverRegistryBuilder`] collects them into a [`SolverRegistry`] the runner
//! queries without knowing any concrete solver type.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// First Advent of Code year
pub const FIRST_YEAR: u16 = 2015;
/// Puzzles per event
pub const DAYS_PER_YEAR: u8 = 25;

/// Whether `year`/`day` names a possible puzzle; years are open-ended
pub fn is_valid_year_day(year: u16, day: u8) -> bool {
    year >= FIRST_YEAR && (1..=DAYS_PER_YEAR).contains(&day)
}

/// Parses input into a ready-to-solve day
pub type SolverFn = for<'a> fn(u16, u8, &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

/// The [`SolverFn`] for `S`
pub fn instantiate<'a, S: Solver + 'static>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}

/// A registered day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

struct Registered {
    parts: u8,
    create: SolverFn,
}

/// Link-time registration record for one day module
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
    pub create: SolverFn,
    /// Free-form labels for `--tags` filtering, e.g. `"wip"`
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Collects days, rejecting duplicates and dates Advent of Code never has
#[derive(Default)]
pub struct SolverRegistryBuilder {
    days: BTreeMap<(u16, u8), Registered>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        create: SolverFn,
    ) -> Result<Self, RegistrationError> {
        if !is_valid_year_day(year, day) {
            return Err(RegistrationError::InvalidYearDay { year, day });
        }
        if self.days.contains_key(&(year, day)) {
            return Err(RegistrationError::Duplicate { year, day });
        }
        self.days.insert((year, day), Registered { parts, create });
        Ok(self)
    }

    /// Register `S` by hand, outside the plugin table
    pub fn register<S: Solver + 'static>(self, year: u16, day: u8) -> Result<Self, RegistrationError> {
        self.insert(year, day, S::PARTS, instantiate::<S>)
    }

    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the linked plugins for which `filter` returns `true`
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = self.insert(plugin.year, plugin.day, plugin.parts, plugin.create)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry { days: self.days }
    }
}

/// Immutable (year, day) → solver lookup
pub struct SolverRegistry {
    days: BTreeMap<(u16, u8), Registered>,
}

impl SolverRegistry {
    pub fn info(&self, year: u16, day: u8) -> Option<DayInfo> {
        self.days.get(&(year, day)).map(|entry| DayInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.days.contains_key(&(year, day))
    }

    /// Registered days ordered by year, then day
    pub fn iter(&self) -> impl Iterator<Item = DayInfo> + '_ {
        self.days.iter().map(|(&(year, day), entry)| DayInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Parse `input` with the day registered for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .days
            .get(&(year, day))
            .ok_or(SolverError::NotFound { year, day })?;
        Ok((entry.create)(year, day, input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_year_day() {
        assert!(is_valid_year_day(2015, 1));
        assert!(is_valid_year_day(2025, 25));
        assert!(is_valid_year_day(2035, 1));
        assert!(is_valid_year_day(u16::MAX, 12));
        assert!(!is_valid_year_day(2014, 1));
        assert!(!is_valid_year_day(2025, 0));
        assert!(!is_valid_year_day(2025, 26));
    }
}

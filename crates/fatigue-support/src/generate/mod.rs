//! Synthetic data generators
//!
//! Rosters are fully determined by their inputs. Exercise and sleep data are
//! random, and always draw from a caller-supplied generator so a seeded
//! `ChaCha8Rng` reproduces the same output.

pub mod catalog;
mod exercise;
mod roster;
mod sleep;

pub use catalog::{ShiftCatalog, ShiftDefinition};
pub use exercise::generate_exercise_data;
pub use roster::{RosterGenerator, UnknownShiftPolicy};
pub use sleep::generate_sleep_data;

use chrono::NaiveDate;

use crate::error::{FatigueError, Result};

/// Every calendar day in `[start, end]`, in order
pub(crate) fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Result<impl Iterator<Item = NaiveDate>> {
    let count = day_count(start, end)?;
    Ok(start.iter_days().take(count as usize))
}

/// Number of calendar days in `[start, end]`
pub fn day_count(start: NaiveDate, end: NaiveDate) -> Result<u32> {
    if end < start {
        return Err(FatigueError::InvalidDateRange { start, end });
    }
    Ok((end - start).num_days() as u32 + 1)
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_count() {
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        assert_eq!(day_count(start, end).unwrap(), 30);
        assert_eq!(day_count(start, start).unwrap(), 1);
        assert!(matches!(
            day_count(end, start),
            Err(FatigueError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_days_inclusive_crosses_month() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        let days: Vec<NaiveDate> = days_inclusive(start, end).unwrap().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[2], NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(days[3], end);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(7.12345), 7.12);
        assert_eq!(round2(1.006), 1.01);
    }
}

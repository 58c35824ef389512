//! Rolling-window summaries over dated entries
//!
//! Windows are anchored at the latest entry date, never at "today": a
//! lookback of `n` days keeps every entry dated on or after `latest - n`.
//! Summaries are pure functions of the entries and the lookback.

mod exercise;
mod sleep;
mod stats;

pub use exercise::summarise_exercise;
pub use sleep::summarise_sleep;
pub use stats::{mean, sample_std_dev};

use chrono::{Duration, NaiveDate};

use crate::error::{FatigueError, Result};
use crate::models::{ExerciseEntry, SleepRecord};

/// Anything that can be placed on the calendar for window filtering
pub trait Dated {
    /// Date the entry belongs to
    fn date(&self) -> NaiveDate;

    /// Last date the entry covers
    fn end_date(&self) -> NaiveDate {
        self.date()
    }
}

impl Dated for ExerciseEntry {
    fn date(&self) -> NaiveDate {
        self.start
    }

    fn end_date(&self) -> NaiveDate {
        self.end
    }
}

impl Dated for SleepRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Entries selected by a lookback, with the calendar span they actually cover
#[derive(Debug)]
pub struct Window<'a, T> {
    pub lookback_days: u32,
    /// Earliest entry date inside the window
    pub start: NaiveDate,
    /// Latest entry end date inside the window
    pub end: NaiveDate,
    pub entries: Vec<&'a T>,
}

impl<'a, T: Dated> Window<'a, T> {
    /// Select the entries within `lookback_days` of the latest entry date
    pub fn select(entries: &'a [T], lookback_days: u32) -> Result<Self> {
        let anchor = entries
            .iter()
            .map(Dated::date)
            .max()
            .ok_or(FatigueError::EmptyWindow)?;
        let latest_end = entries
            .iter()
            .map(Dated::end_date)
            .max()
            .unwrap_or(anchor);
        let cutoff = anchor
            .checked_sub_signed(Duration::days(lookback_days as i64))
            .unwrap_or(NaiveDate::MIN);

        let selected: Vec<&T> = entries
            .iter()
            .filter(|e| e.date() >= cutoff && e.date() <= latest_end)
            .collect();

        let start = selected
            .iter()
            .map(|e| e.date())
            .min()
            .ok_or(FatigueError::EmptyWindow)?;
        let end = selected.iter().map(|e| e.end_date()).max().unwrap_or(start);

        Ok(Self {
            lookback_days,
            start,
            end,
            entries: selected,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

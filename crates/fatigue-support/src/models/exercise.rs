//! Exercise data models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UserId;
use crate::error::{FatigueError, Result};
use crate::summary;

/// Kind of exercise entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    /// Desk or seated time
    Sedentary,
    /// Walking-intensity activity
    Light,
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::Sedentary => f.pad("Sedentary"),
            ExerciseType::Light => f.pad("Light"),
        }
    }
}

/// A single day's exercise entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub exercise_type: ExerciseType,
    pub duration_hours: f64,
    pub calories_burned: u32,
    /// Only recorded for activity bouts
    #[serde(default)]
    pub steps_taken: Option<u32>,
}

impl ExerciseEntry {
    pub fn is_sedentary(&self) -> bool {
        self.exercise_type == ExerciseType::Sedentary
    }
}

/// Statistics over a lookback window of exercise entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    /// Lookback in days
    pub summary_period: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_exercise_hours: f64,
    pub exercise_hours_std_dev: f64,
    pub average_calories_burned: f64,
    pub calories_burned_std_dev: f64,
    pub average_steps_taken: Option<f64>,
    pub steps_taken_std_dev: Option<f64>,
    pub average_sedentary_duration: Option<f64>,
    pub sedentary_duration_std_dev: Option<f64>,
}

/// A user's exercise entries together with their current summary.
///
/// The summary always reflects the current entry list: appending goes through
/// [`ExerciseCollection::push`], which recomputes it, and deserializing
/// rebuilds it from the entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredExerciseCollection")]
pub struct ExerciseCollection {
    pub user_id: UserId,
    exercise_entries: Vec<ExerciseEntry>,
    exercise_summary: ExerciseSummary,
}

/// Serialized form; only the lookback is taken from a stored summary
#[derive(Deserialize)]
struct StoredExerciseCollection {
    user_id: UserId,
    exercise_entries: Vec<ExerciseEntry>,
    #[serde(default)]
    exercise_summary: Option<StoredSummaryPeriod>,
}

#[derive(Deserialize)]
struct StoredSummaryPeriod {
    summary_period: u32,
}

impl TryFrom<StoredExerciseCollection> for ExerciseCollection {
    type Error = FatigueError;

    fn try_from(stored: StoredExerciseCollection) -> Result<Self> {
        let lookback = match stored.exercise_summary {
            Some(period) => period.summary_period,
            None => covered_days(&stored.exercise_entries),
        };
        Self::new(stored.user_id, stored.exercise_entries, lookback)
    }
}

/// Calendar days from the earliest start to the latest end, inclusive
fn covered_days(entries: &[ExerciseEntry]) -> u32 {
    let first = entries.iter().map(|e| e.start).min();
    let last = entries.iter().map(|e| e.end).max();
    match (first, last) {
        (Some(first), Some(last)) if last >= first => (last - first).num_days() as u32 + 1,
        _ => 0,
    }
}

impl ExerciseCollection {
    /// Build a collection and summarise it over `lookback_days`
    pub fn new(user_id: UserId, entries: Vec<ExerciseEntry>, lookback_days: u32) -> Result<Self> {
        let exercise_summary = summary::summarise_exercise(&entries, lookback_days)?;
        Ok(Self {
            user_id,
            exercise_entries: entries,
            exercise_summary,
        })
    }

    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.exercise_entries
    }

    /// The most recently computed summary
    pub fn summary(&self) -> &ExerciseSummary {
        &self.exercise_summary
    }

    /// Summarise over a different lookback without touching the stored summary
    pub fn summarise(&self, lookback_days: u32) -> Result<ExerciseSummary> {
        summary::summarise_exercise(&self.exercise_entries, lookback_days)
    }

    /// Recompute and store the summary over `lookback_days`
    pub fn refresh_summary(&mut self, lookback_days: u32) -> Result<()> {
        self.exercise_summary = self.summarise(lookback_days)?;
        Ok(())
    }

    /// Append an entry and recompute the summary with the current lookback
    pub fn push(&mut self, entry: ExerciseEntry) -> Result<()> {
        self.exercise_entries.push(entry);
        let lookback = self.exercise_summary.summary_period;
        self.refresh_summary(lookback)
    }
}

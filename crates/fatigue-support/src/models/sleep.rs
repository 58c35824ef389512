//! Sleep data models

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::UserId;
use crate::error::Result;
use crate::summary;

/// Sleep stage of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepType {
    Deep,
    Light,
    #[serde(rename = "REM")]
    Rem,
    Wake,
}

impl SleepType {
    /// Whether time in this stage counts as sleep
    pub fn is_asleep(&self) -> bool {
        !matches!(self, SleepType::Wake)
    }
}

impl fmt::Display for SleepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SleepType::Deep => f.pad("Deep"),
            SleepType::Light => f.pad("Light"),
            SleepType::Rem => f.pad("REM"),
            SleepType::Wake => f.pad("Wake"),
        }
    }
}

/// One sleep-stage segment. `date` is the night the segment belongs to, even
/// when the clock times have wrapped past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub sleep_type: SleepType,
    #[serde(with = "super::clock")]
    pub start_time: NaiveTime,
    #[serde(with = "super::clock")]
    pub end_time: NaiveTime,
    pub duration_hours: f64,
    pub is_main_sleep: bool,
}

/// Statistics over a lookback window of sleep records. Wake segments are
/// excluded from every duration statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    /// Lookback in days
    pub summary_period: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_sleep_hours: f64,
    /// Mean length of a sleep segment
    pub average_sleep_hours: Option<f64>,
    pub sleep_hours_std_dev: Option<f64>,
    pub avg_main_sleep_hours: Option<f64>,
    /// Nights with at least one sleep segment
    pub nights: u32,
    pub average_nightly_sleep_hours: Option<f64>,
}

/// A user's sleep records with an optional summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepCollection {
    pub user_id: UserId,
    pub sleep_records: Vec<SleepRecord>,
    #[serde(default)]
    pub summary: Option<SleepSummary>,
}

impl SleepCollection {
    pub fn new(user_id: UserId, sleep_records: Vec<SleepRecord>) -> Self {
        Self {
            user_id,
            sleep_records,
            summary: None,
        }
    }

    /// Summarise over `lookback_days` without storing the result
    pub fn summarise(&self, lookback_days: u32) -> Result<SleepSummary> {
        summary::summarise_sleep(&self.sleep_records, lookback_days)
    }

    /// Recompute and store the summary over `lookback_days`
    pub fn refresh_summary(&mut self, lookback_days: u32) -> Result<()> {
        self.summary = Some(self.summarise(lookback_days)?);
        Ok(())
    }

    /// Records belonging to one night
    pub fn night(&self, date: NaiveDate) -> impl Iterator<Item = &SleepRecord> {
        self.sleep_records.iter().filter(move |r| r.date == date)
    }
}

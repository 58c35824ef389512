use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{mean, sample_std_dev, Window};
use crate::error::Result;
use crate::models::{SleepRecord, SleepSummary};

/// Summarise sleep records over a lookback window.
///
/// Only Deep, Light and REM segments count as sleep. Wake segments stay in the
/// window's date bounds but never enter a duration statistic.
pub fn summarise_sleep(records: &[SleepRecord], lookback_days: u32) -> Result<SleepSummary> {
    let window = Window::select(records, lookback_days)?;

    let asleep: Vec<&SleepRecord> = window
        .entries
        .iter()
        .copied()
        .filter(|r| r.sleep_type.is_asleep())
        .collect();

    let durations: Vec<f64> = asleep.iter().map(|r| r.duration_hours).collect();
    let main_sleep: Vec<f64> = asleep
        .iter()
        .filter(|r| r.is_main_sleep)
        .map(|r| r.duration_hours)
        .collect();

    let mut nightly: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in &asleep {
        *nightly.entry(record.date).or_insert(0.0) += record.duration_hours;
    }
    let nightly_totals: Vec<f64> = nightly.values().copied().collect();

    Ok(SleepSummary {
        summary_period: lookback_days,
        start_date: window.start,
        end_date: window.end,
        total_sleep_hours: durations.iter().sum(),
        average_sleep_hours: mean(&durations),
        sleep_hours_std_dev: sample_std_dev(&durations),
        avg_main_sleep_hours: mean(&main_sleep),
        nights: nightly_totals.len() as u32,
        average_nightly_sleep_hours: mean(&nightly_totals),
    })
}

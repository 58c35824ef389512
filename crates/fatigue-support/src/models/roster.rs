//! Roster data models
//!
//! A roster is one `RosterDay` per calendar day, each holding the shifts worked
//! that day. Off days carry an empty shift list.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::FatigueError;

/// Roster regime, which decides the shift catalog in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterType {
    #[serde(rename = "8-hour", alias = "EIGHT_HOUR")]
    EightHour,
    #[serde(rename = "12-hour", alias = "TWELVE_HOUR")]
    TwelveHour,
}

impl fmt::Display for RosterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterType::EightHour => f.pad("8-hour"),
            RosterType::TwelveHour => f.pad("12-hour"),
        }
    }
}

impl FromStr for RosterType {
    type Err = FatigueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "8-HOUR" | "EIGHT_HOUR" | "8" => Ok(RosterType::EightHour),
            "12-HOUR" | "TWELVE_HOUR" | "12" => Ok(RosterType::TwelveHour),
            _ => Err(FatigueError::invalid_param(format!(
                "unknown roster type '{}', expected 8-hour or 12-hour",
                s
            ))),
        }
    }
}

/// Shift codes of the 8-hour regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EightHourShift {
    /// Night
    N,
    /// Morning
    M,
    /// Afternoon
    A,
    /// Office hours
    OH,
}

impl FromStr for EightHourShift {
    type Err = FatigueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(EightHourShift::N),
            "M" => Ok(EightHourShift::M),
            "A" => Ok(EightHourShift::A),
            "OH" => Ok(EightHourShift::OH),
            _ => Err(FatigueError::UnknownShiftCode {
                code: s.to_string(),
                roster_type: RosterType::EightHour,
            }),
        }
    }
}

/// Shift codes of the 12-hour regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwelveHourShift {
    /// Day
    A,
    /// Evening into night, written `B/D` on rosters
    #[serde(rename = "B/D")]
    BD,
    /// Night
    C,
    /// Late
    L,
}

impl FromStr for TwelveHourShift {
    type Err = FatigueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(TwelveHourShift::A),
            "B/D" => Ok(TwelveHourShift::BD),
            "C" => Ok(TwelveHourShift::C),
            "L" => Ok(TwelveHourShift::L),
            _ => Err(FatigueError::UnknownShiftCode {
                code: s.to_string(),
                roster_type: RosterType::TwelveHour,
            }),
        }
    }
}

/// A span of wall-clock time, either a shift or a break
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePeriod {
    #[serde(with = "super::clock")]
    pub start_time: NaiveTime,
    #[serde(with = "super::clock")]
    pub end_time: NaiveTime,
    pub total_hours: f64,
}

impl TimePeriod {
    /// Period whose length is the wall-clock span from `start` to `end`.
    /// An end at or before the start wraps to the next day.
    pub fn between(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time,
            total_hours: span_hours(start_time, end_time),
        }
    }

    /// Wall-clock span of this period, independent of `total_hours`
    pub fn span_hours(&self) -> f64 {
        span_hours(self.start_time, self.end_time)
    }

    /// Whether the period runs past midnight
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }
}

fn span_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let start_secs = start.num_seconds_from_midnight() as i64;
    let mut end_secs = end.num_seconds_from_midnight() as i64;
    if end_secs <= start_secs {
        end_secs += 24 * 3600;
    }
    (end_secs - start_secs) as f64 / 3600.0
}

/// One worked shift with its breaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Worked spans; a single span unless the shift is split
    #[serde(rename = "duration")]
    pub durations: Vec<TimePeriod>,
    pub breaks: Vec<TimePeriod>,
}

impl Shift {
    /// Scheduled hours across all spans
    pub fn total_hours(&self) -> f64 {
        self.durations.iter().map(|p| p.total_hours).sum()
    }

    /// Break hours across all breaks
    pub fn break_hours(&self) -> f64 {
        self.breaks.iter().map(|p| p.total_hours).sum()
    }
}

/// Shifts worked on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterDay {
    pub date: NaiveDate,
    pub shifts: Vec<Shift>,
}

impl RosterDay {
    pub fn is_off(&self) -> bool {
        self.shifts.is_empty()
    }
}

/// A generated roster, one entry per calendar day in `[start, end]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(rename = "type")]
    pub roster_type: RosterType,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub roster_days: Vec<RosterDay>,
}

impl Roster {
    /// Roster day for a given date, if it falls inside the roster
    pub fn day(&self, date: NaiveDate) -> Option<&RosterDay> {
        let offset = (date - self.start).num_days();
        if offset < 0 {
            return None;
        }
        self.roster_days
            .get(offset as usize)
            .filter(|day| day.date == date)
    }

    /// Scheduled hours over the roster days in `[from, to]`
    pub fn scheduled_hours(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        self.roster_days
            .iter()
            .filter(|day| day.date >= from && day.date <= to)
            .flat_map(|day| day.shifts.iter())
            .map(Shift::total_hours)
            .sum()
    }

    /// Number of days without any shift
    pub fn off_days(&self) -> usize {
        self.roster_days.iter().filter(|day| day.is_off()).count()
    }
}

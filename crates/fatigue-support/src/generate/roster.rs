use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::ShiftCatalog;
use super::days_inclusive;
use crate::error::{FatigueError, Result};
use crate::models::{Roster, RosterDay, RosterType};

/// What to do with a shift code the regime's catalog does not know
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownShiftPolicy {
    /// Roster the day with no shifts
    #[default]
    OffDay,
    /// Fail with `UnknownShiftCode`
    Reject,
}

/// Expands a date range and a cyclic shift sequence into a roster
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterGenerator {
    policy: UnknownShiftPolicy,
}

impl RosterGenerator {
    pub fn new(policy: UnknownShiftPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownShiftPolicy {
        self.policy
    }

    /// Roster for every day in `[start, end]`, day `i` working
    /// `shift_sequence[i % len]`.
    pub fn generate<S: AsRef<str>>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        roster_type: RosterType,
        shift_sequence: &[S],
    ) -> Result<Roster> {
        if shift_sequence.is_empty() {
            return Err(FatigueError::EmptyShiftSequence);
        }

        let mut roster_days = Vec::new();
        for (offset, date) in days_inclusive(start, end)?.enumerate() {
            let code = shift_sequence[offset % shift_sequence.len()].as_ref();
            let shifts = match ShiftCatalog::lookup(roster_type, code) {
                Some(shift) => vec![shift],
                None => match self.policy {
                    UnknownShiftPolicy::OffDay => {
                        debug!(%date, code, %roster_type, "unknown shift code, rostering an off day");
                        Vec::new()
                    }
                    UnknownShiftPolicy::Reject => {
                        return Err(FatigueError::UnknownShiftCode {
                            code: code.to_string(),
                            roster_type,
                        })
                    }
                },
            };
            roster_days.push(RosterDay { date, shifts });
        }

        Ok(Roster {
            roster_type,
            start,
            end,
            roster_days,
        })
    }
}

impl Roster {
    /// Generate a roster with the default unknown-code policy
    pub fn generate<S: AsRef<str>>(
        start: NaiveDate,
        end: NaiveDate,
        roster_type: RosterType,
        shift_sequence: &[S],
    ) -> Result<Self> {
        RosterGenerator::default().generate(start, end, roster_type, shift_sequence)
    }
}

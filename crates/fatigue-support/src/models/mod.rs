//! Data models for personnel rosters, exercise and sleep
//!
//! Every type here serializes to the flat JSON shape handed to the chat layer:
//! dates as `YYYY-MM-DD`, clock times as `HH:MM`.

pub mod clock;
pub mod exercise;
pub mod personnel;
pub mod roster;
pub mod sleep;

pub use exercise::{ExerciseCollection, ExerciseEntry, ExerciseSummary, ExerciseType};
pub use personnel::{Gender, Personnel, Role};
pub use roster::{EightHourShift, Roster, RosterDay, RosterType, Shift, TimePeriod, TwelveHourShift};
pub use sleep::{SleepCollection, SleepRecord, SleepSummary, SleepType};

/// Identifier for a member of ground crew
pub type UserId = u32;

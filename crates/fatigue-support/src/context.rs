//! Serialized personnel context handed to the chat layer
//!
//! The chat layer substitutes these strings into its prompt template
//! next to retrieved documents and the user's question. It never sees the
//! underlying records.

use serde::Serialize;

use crate::error::{FatigueError, Result};
use crate::models::{Personnel, UserId};
use crate::store::PersonnelRepository;

pub const NO_ROSTER: &str = "No roster information available.";
pub const NO_EXERCISE: &str = "No exercise information available.";
pub const NO_SLEEP: &str = "No sleep information available.";
pub const NO_PERSONAL_DETAILS: &str = "No further personal details available.";

/// Personal details, roster dump plus exercise and sleep summaries for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatContext {
    pub user_id: UserId,
    pub lookback_days: u32,
    /// One `- key: value` line per detail
    pub personal_info: String,
    pub roster_info: String,
    pub exercise_info: String,
    pub sleep_info: String,
}

impl ChatContext {
    /// Build the context for `user_id`, summarising over `lookback_days`
    pub fn for_user(
        repository: &dyn PersonnelRepository,
        user_id: UserId,
        lookback_days: u32,
    ) -> Result<Self> {
        let personnel = repository
            .get(user_id)
            .ok_or(FatigueError::UserNotFound(user_id))?;

        let personal_info = render_personal_info(&personnel);

        let roster_info = match &personnel.roster_info {
            Some(roster) => serde_json::to_string(roster)?,
            None => NO_ROSTER.to_string(),
        };

        let exercise_info = match &personnel.exercise_info {
            Some(exercise) => serde_json::to_string(&exercise.summarise(lookback_days)?)?,
            None => NO_EXERCISE.to_string(),
        };

        let sleep_info = match &personnel.sleep_info {
            Some(sleep) => serde_json::to_string(&sleep.summarise(lookback_days)?)?,
            None => NO_SLEEP.to_string(),
        };

        Ok(Self {
            user_id,
            lookback_days,
            personal_info,
            roster_info,
            exercise_info,
            sleep_info,
        })
    }
}

/// Position, age and gender followed by the free-form details in key order
pub fn render_personal_info(personnel: &Personnel) -> String {
    let mut lines = vec![
        format!("- position: {}", personnel.position),
        format!("- age: {}", personnel.age),
        format!("- gender: {}", personnel.gender),
    ];

    match personnel.personal_info.as_ref().filter(|info| !info.is_empty()) {
        Some(info) => {
            for (key, value) in info {
                lines.push(format!("- {}: {}", key, render_value(value)));
            }
        }
        None => lines.push(NO_PERSONAL_DETAILS.to_string()),
    }

    lines.join("\n")
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{RosterType, UserId};

/// Main error type for fatigue-support
#[derive(Error, Debug)]
pub enum FatigueError {
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Shift sequence is empty, nothing to cycle through")]
    EmptyShiftSequence,

    #[error("Unknown shift code '{code}' for {roster_type} roster")]
    UnknownShiftCode { code: String, roster_type: RosterType },

    #[error("No entries fall inside the requested window")]
    EmptyWindow,

    #[error("No personnel found for user {0}")]
    UserNotFound(UserId),

    #[error("Invalid date format: {0}. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FatigueError>;

impl FatigueError {
    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid parameter error from a message
    pub fn invalid_param(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Render an error for the terminal, with a hint where one helps
pub fn format_user_error(err: &FatigueError) -> String {
    match err {
        FatigueError::UserNotFound(_) => {
            format!("{}. Run 'fatigue personnel list' to see known users.", err)
        }
        FatigueError::EmptyWindow => {
            format!("{}. Try a longer lookback with --days.", err)
        }
        FatigueError::UnknownShiftCode { .. } => {
            format!("{}. Drop --strict to treat it as an off day.", err)
        }
        _ => err.to_string(),
    }
}

/// Parse an ISO calendar date (YYYY-MM-DD)
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FatigueError::InvalidDateFormat(value.to_string()))
}

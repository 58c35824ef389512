//! Exercise commands

use crate::cli::{format_opt, print_json, OutputFormat, Session};
use crate::error::{FatigueError, Result};
use crate::models::UserId;

/// Show an exercise summary over the lookback window
pub fn show(session: &Session, user_id: UserId, days: Option<u32>, format: OutputFormat) -> Result<()> {
    let personnel = session
        .store
        .personnel(user_id)
        .ok_or(FatigueError::UserNotFound(user_id))?;

    let Some(collection) = &personnel.exercise_info else {
        println!("User {} has no exercise data.", user_id);
        return Ok(());
    };

    let summary = collection.summarise(session.lookback(days))?;

    if format == OutputFormat::Json {
        return print_json(&summary);
    }

    println!(
        "Exercise for user {}, {} to {} ({} day lookback)",
        user_id, summary.start_date, summary.end_date, summary.summary_period
    );
    println!("{}", "-".repeat(48));
    println!("{:<22} {:>10} {:>10}", "", "Mean", "Std Dev");
    println!(
        "{:<22} {:>10.2} {:>10.2}",
        "Exercise hours", summary.average_exercise_hours, summary.exercise_hours_std_dev
    );
    println!(
        "{:<22} {:>10.2} {:>10.2}",
        "Calories burned", summary.average_calories_burned, summary.calories_burned_std_dev
    );
    println!(
        "{:<22} {:>10} {:>10}",
        "Steps taken",
        format_opt(summary.average_steps_taken),
        format_opt(summary.steps_taken_std_dev)
    );
    println!(
        "{:<22} {:>10} {:>10}",
        "Sedentary hours",
        format_opt(summary.average_sedentary_duration),
        format_opt(summary.sedentary_duration_std_dev)
    );

    Ok(())
}

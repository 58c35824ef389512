//! Sleep commands

use serde::Serialize;

use crate::cli::{format_opt, print_json, OutputFormat, Session};
use crate::error::{FatigueError, Result};
use crate::models::{clock, SleepRecord, SleepSummary, UserId};
use crate::summary::Window;

#[derive(Serialize)]
struct SleepReport<'a> {
    summary: SleepSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Vec<&'a SleepRecord>>,
}

/// Show a sleep summary over the lookback window, optionally with the
/// records inside it
pub fn show(
    session: &Session,
    user_id: UserId,
    days: Option<u32>,
    records: bool,
    format: OutputFormat,
) -> Result<()> {
    let personnel = session
        .store
        .personnel(user_id)
        .ok_or(FatigueError::UserNotFound(user_id))?;

    let Some(collection) = &personnel.sleep_info else {
        println!("User {} has no sleep data.", user_id);
        return Ok(());
    };

    let lookback = session.lookback(days);
    let summary = collection.summarise(lookback)?;
    let window = if records {
        Some(Window::select(&collection.sleep_records, lookback)?.entries)
    } else {
        None
    };

    if format == OutputFormat::Json {
        return print_json(&SleepReport {
            summary,
            records: window,
        });
    }

    println!(
        "Sleep for user {}, {} to {} ({} day lookback)",
        user_id, summary.start_date, summary.end_date, summary.summary_period
    );
    println!("{}", "-".repeat(48));
    println!("Total sleep:         {:>8.2} h", summary.total_sleep_hours);
    println!("Nights:              {:>8}", summary.nights);
    println!("Avg per night:       {:>8} h", format_opt(summary.average_nightly_sleep_hours));
    println!("Avg segment:         {:>8} h", format_opt(summary.average_sleep_hours));
    println!("Segment std dev:     {:>8} h", format_opt(summary.sleep_hours_std_dev));
    println!("Avg main sleep:      {:>8} h", format_opt(summary.avg_main_sleep_hours));

    if let Some(records) = window {
        println!();
        println!("{:<12} {:<6} {:>6} {:>6} {:>7}", "Night", "Stage", "Start", "End", "Hours");
        println!("{}", "-".repeat(42));
        for record in records {
            println!(
                "{:<12} {:<6} {:>6} {:>6} {:>7.2}",
                record.date,
                record.sleep_type,
                clock::format(record.start_time),
                clock::format(record.end_time),
                record.duration_hours
            );
        }
    }

    Ok(())
}

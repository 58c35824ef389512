//! Roster commands

use chrono::NaiveDate;

use crate::cli::{print_json, OutputFormat, Session};
use crate::error::{parse_date, FatigueError, Result};
use crate::generate::{RosterGenerator, UnknownShiftPolicy};
use crate::models::{clock, Roster, RosterType, UserId};

/// Show a stored user's roster
pub fn show(session: &Session, user_id: UserId, format: OutputFormat) -> Result<()> {
    let personnel = session
        .store
        .personnel(user_id)
        .ok_or(FatigueError::UserNotFound(user_id))?;

    match &personnel.roster_info {
        Some(roster) => print_roster(roster, format),
        None => {
            println!("User {} has no roster.", user_id);
            Ok(())
        }
    }
}

/// Generate a roster from the command line without touching the store
pub fn generate(
    from: &str,
    to: &str,
    roster_type: &str,
    sequence: &str,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    let start: NaiveDate = parse_date(from)?;
    let end: NaiveDate = parse_date(to)?;
    let roster_type: RosterType = roster_type.parse()?;
    let codes: Vec<&str> = sequence
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    let policy = if strict {
        UnknownShiftPolicy::Reject
    } else {
        UnknownShiftPolicy::OffDay
    };
    let roster = RosterGenerator::new(policy).generate(start, end, roster_type, &codes)?;

    print_roster(&roster, format)
}

fn print_roster(roster: &Roster, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(roster);
    }

    println!("{} roster, {} to {}", roster.roster_type, roster.start, roster.end);
    println!(
        "{:<12} {:<4} {:>6} {:>6} {:>7} {}",
        "Date", "Day", "Start", "End", "Hours", "Breaks"
    );
    println!("{}", "-".repeat(56));

    for day in &roster.roster_days {
        let weekday = day.date.format("%a").to_string();
        if day.is_off() {
            println!("{:<12} {:<4} {:>6} {:>6} {:>7} -", day.date, weekday, "off", "", "");
            continue;
        }
        for shift in &day.shifts {
            let (start, end) = match shift.durations.first() {
                Some(p) => (clock::format(p.start_time), clock::format(p.end_time)),
                None => ("-".to_string(), "-".to_string()),
            };
            let breaks: Vec<String> = shift
                .breaks
                .iter()
                .map(|b| format!("{}-{}", clock::format(b.start_time), clock::format(b.end_time)))
                .collect();
            println!(
                "{:<12} {:<4} {:>6} {:>6} {:>7.2} {}",
                day.date,
                weekday,
                start,
                end,
                shift.total_hours(),
                breaks.join(", ")
            );
        }
    }

    println!(
        "\nScheduled: {:.2} h over {} days, {} off",
        roster.scheduled_hours(roster.start, roster.end),
        roster.roster_days.len(),
        roster.off_days()
    );

    Ok(())
}

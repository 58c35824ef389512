//! Personnel commands

use serde::Serialize;

use crate::cli::{print_json, OutputFormat, Session};
use crate::error::Result;
use crate::models::UserId;
use crate::store::PersonnelRepository;

#[derive(Serialize)]
struct PersonnelRow {
    user_id: UserId,
    position: String,
    age: u8,
    gender: String,
    roster_type: Option<String>,
    location: Option<String>,
}

/// List every known user
pub fn list(session: &Session, format: OutputFormat) -> Result<()> {
    let rows: Vec<PersonnelRow> = session
        .store
        .user_ids()
        .into_iter()
        .filter_map(|id| session.store.personnel(id))
        .map(|p| PersonnelRow {
            user_id: p.user_id,
            position: p.position.to_string(),
            age: p.age,
            gender: p.gender.to_string(),
            roster_type: p.roster_info.as_ref().map(|r| r.roster_type.to_string()),
            location: p.personal_str("current_location").map(str::to_string),
        })
        .collect();

    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    println!(
        "{:<6} {:<24} {:>4} {:<3} {:<8} {}",
        "User", "Position", "Age", "Sex", "Roster", "Location"
    );
    println!("{}", "-".repeat(64));
    for row in &rows {
        println!(
            "{:<6} {:<24} {:>4} {:<3} {:<8} {}",
            row.user_id,
            row.position,
            row.age,
            row.gender,
            row.roster_type.as_deref().unwrap_or("-"),
            row.location.as_deref().unwrap_or("-"),
        );
    }
    println!("\n{} users (seed {})", rows.len(), session.seed);

    Ok(())
}

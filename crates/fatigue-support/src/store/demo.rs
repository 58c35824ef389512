//! Demo ground-crew profiles

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::json;

use super::profile::{PersonnelProfile, RosterPlan};
use crate::models::{Gender, Role, RosterType};

fn september(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, day).unwrap_or(NaiveDate::MIN)
}

fn personal_info(location: &str, activities: &[&str]) -> BTreeMap<String, serde_json::Value> {
    let mut info = BTreeMap::new();
    info.insert("current_location".to_string(), json!(location));
    info.insert("favourite_activities".to_string(), json!(activities));
    info
}

fn cycle(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// Three air traffic controllers rostered over September 2025.
/// User 3 has no roster and so no generated data.
pub fn demo_profiles() -> Vec<PersonnelProfile> {
    vec![
        PersonnelProfile {
            user_id: 1,
            position: Role::AirTrafficController,
            age: 28,
            gender: Gender::Female,
            roster: Some(RosterPlan {
                roster_type: RosterType::EightHour,
                start: september(1),
                end: september(30),
                shift_sequence: cycle(&["N", "M", "A", "OH"]),
            }),
            personal_info: Some(personal_info(
                "Singapore",
                &["running", "photography", "travel blogging"],
            )),
        },
        PersonnelProfile {
            user_id: 2,
            position: Role::AirTrafficController,
            age: 31,
            gender: Gender::Male,
            roster: Some(RosterPlan {
                roster_type: RosterType::TwelveHour,
                start: september(1),
                end: september(30),
                shift_sequence: cycle(&["A", "B/D", "C", "L"]),
            }),
            personal_info: Some(personal_info("Tokyo", &["surfing", "guitar", "cycling"])),
        },
        PersonnelProfile {
            user_id: 3,
            position: Role::AirTrafficController,
            age: 26,
            gender: Gender::Female,
            roster: None,
            personal_info: Some(personal_info("Doha", &["painting", "baking", "yoga"])),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profiles() {
        let profiles = demo_profiles();
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].roster.as_ref().unwrap().roster_type, RosterType::EightHour);
        assert_eq!(profiles[1].roster.as_ref().unwrap().shift_sequence[1], "B/D");
        assert!(profiles[2].roster.is_none());
        assert_eq!(
            profiles[1].personal_info.as_ref().unwrap()["current_location"],
            "Tokyo"
        );
    }
}

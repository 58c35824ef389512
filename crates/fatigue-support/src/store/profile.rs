//! What to generate for each member of ground crew

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generate::{generate_exercise_data, generate_sleep_data, RosterGenerator};
use crate::models::{Gender, Personnel, Role, RosterType, UserId};

/// Roster regime, cycle and date range for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlan {
    pub roster_type: RosterType,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub shift_sequence: Vec<String>,
}

/// Static description of a user, expanded into a [`Personnel`] at start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelProfile {
    pub user_id: UserId,
    pub position: Role,
    pub age: u8,
    pub gender: Gender,
    /// Users without a plan get no roster, exercise or sleep data
    #[serde(default)]
    pub roster: Option<RosterPlan>,
    #[serde(default)]
    pub personal_info: Option<BTreeMap<String, serde_json::Value>>,
}

impl PersonnelProfile {
    /// Generate this user's roster, exercise and sleep data over the plan's range
    pub fn generate<R: Rng + ?Sized>(&self, roster_generator: &RosterGenerator, rng: &mut R) -> Result<Personnel> {
        let mut personnel = Personnel::new(self.user_id, self.position, self.age, self.gender);
        personnel.personal_info = self.personal_info.clone();

        if let Some(plan) = &self.roster {
            personnel.roster_info = Some(roster_generator.generate(
                plan.start,
                plan.end,
                plan.roster_type,
                &plan.shift_sequence,
            )?);
            personnel.exercise_info = Some(generate_exercise_data(self.user_id, plan.start, plan.end, rng)?);
            personnel.sleep_info = Some(generate_sleep_data(self.user_id, plan.start, plan.end, rng)?);
        }

        Ok(personnel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FatigueError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn profile(roster: Option<RosterPlan>) -> PersonnelProfile {
        PersonnelProfile {
            user_id: 9,
            position: Role::AirTrafficController,
            age: 40,
            gender: Gender::Male,
            roster,
            personal_info: None,
        }
    }

    fn plan(sequence: &[&str]) -> RosterPlan {
        RosterPlan {
            roster_type: RosterType::EightHour,
            start: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 9, 7).unwrap(),
            shift_sequence: sequence.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_generate_with_plan() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let personnel = profile(Some(plan(&["N", "M"])))
            .generate(&RosterGenerator::default(), &mut rng)
            .unwrap();

        assert_eq!(personnel.roster_info.as_ref().unwrap().roster_days.len(), 7);
        assert_eq!(personnel.exercise_info.as_ref().unwrap().user_id, 9);
        assert_eq!(personnel.sleep_info.as_ref().unwrap().summary.as_ref().unwrap().nights, 7);
    }

    #[test]
    fn test_generate_without_plan() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let personnel = profile(None).generate(&RosterGenerator::default(), &mut rng).unwrap();
        assert!(personnel.roster_info.is_none());
        assert!(personnel.exercise_info.is_none());
        assert!(personnel.sleep_info.is_none());
    }

    #[test]
    fn test_generate_propagates_roster_errors() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = profile(Some(plan(&[]))).generate(&RosterGenerator::default(), &mut rng);
        assert!(matches!(result, Err(FatigueError::EmptyShiftSequence)));
    }

    #[test]
    fn test_profile_from_json() {
        let parsed: PersonnelProfile = serde_json::from_value(json!({
            "user_id": 4,
            "position": "ATC",
            "age": 35,
            "gender": "M",
            "roster": {
                "roster_type": "TWELVE_HOUR",
                "start": "2025-10-01",
                "end": "2025-10-14",
                "shift_sequence": ["A", "B/D", "C", "L"]
            }
        }))
        .unwrap();
        let roster = parsed.roster.unwrap();
        assert_eq!(roster.roster_type, RosterType::TwelveHour);
        assert_eq!(roster.shift_sequence.len(), 4);
    }
}

//! Personnel records

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ExerciseCollection, Roster, SleepCollection, UserId};

/// Job role of a member of ground crew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Air Traffic Controller", alias = "ATC")]
    AirTrafficController,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::AirTrafficController => f.pad("Air Traffic Controller"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.pad("M"),
            Gender::Female => f.pad("F"),
        }
    }
}

/// A member of ground crew and the data held about them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personnel {
    pub user_id: UserId,
    pub position: Role,
    pub age: u8,
    pub gender: Gender,
    #[serde(default)]
    pub roster_info: Option<Roster>,
    /// Free-form details such as location or favourite activities
    #[serde(default)]
    pub personal_info: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub exercise_info: Option<ExerciseCollection>,
    #[serde(default)]
    pub sleep_info: Option<SleepCollection>,
}

impl Personnel {
    /// Personnel with no roster, exercise or sleep data attached
    pub fn new(user_id: UserId, position: Role, age: u8, gender: Gender) -> Self {
        Self {
            user_id,
            position,
            age,
            gender,
            roster_info: None,
            personal_info: None,
            exercise_info: None,
            sleep_info: None,
        }
    }

    /// String value from the personal info map
    pub fn personal_str(&self, key: &str) -> Option<&str> {
        self.personal_info
            .as_ref()
            .and_then(|info| info.get(key))
            .and_then(|v| v.as_str())
    }
}

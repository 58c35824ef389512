use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FatigueError, Result};
use crate::generate::UnknownShiftPolicy;
use crate::store::{demo_profiles, PersonnelProfile};

pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

fn default_lookback_days() -> u32 {
    DEFAULT_LOOKBACK_DAYS
}

/// Runtime settings, read from a JSON file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Seed for synthetic data; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Default summary lookback in days
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    #[serde(default)]
    pub unknown_shift_policy: UnknownShiftPolicy,

    /// Profiles to generate; the demo profiles when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<PersonnelProfile>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            unknown_shift_policy: UnknownShiftPolicy::default(),
            profiles: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit): (PathBuf, bool) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (super::settings_path()?, false),
        };

        if !path.exists() {
            if explicit {
                return Err(FatigueError::config(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let json = fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating the parent directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            super::ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Profiles to generate at start-up
    pub fn profiles(&self) -> Vec<PersonnelProfile> {
        self.profiles.clone().unwrap_or_else(demo_profiles)
    }

    fn validate(&self) -> Result<()> {
        if let Some(profiles) = &self.profiles {
            for profile in profiles {
                if let Some(plan) = &profile.roster {
                    if plan.shift_sequence.is_empty() {
                        return Err(FatigueError::config(format!(
                            "profile for user {} has an empty shift sequence",
                            profile.user_id
                        )));
                    }
                    if plan.end < plan.start {
                        return Err(FatigueError::config(format!(
                            "profile for user {} ends before it starts",
                            profile.user_id
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

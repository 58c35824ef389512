//! Personnel storage
//!
//! The chat layer only sees the [`PersonnelRepository`] capability. The
//! in-memory store behind it is populated once at start-up by running the
//! generators for every profile; a database-backed repository would implement
//! the same trait.

mod demo;
mod profile;

pub use demo::demo_profiles;
pub use profile::{PersonnelProfile, RosterPlan};

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{FatigueError, Result};
use crate::generate::{RosterGenerator, UnknownShiftPolicy};
use crate::models::{Personnel, UserId};

/// Read access to personnel records
pub trait PersonnelRepository {
    fn get(&self, user_id: UserId) -> Option<Personnel>;

    /// Known user ids, ascending
    fn user_ids(&self) -> Vec<UserId>;
}

/// Personnel held in process memory
#[derive(Debug, Default)]
pub struct InMemoryPersonnelStore {
    personnel: HashMap<UserId, Personnel>,
}

impl InMemoryPersonnelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate every profile's data and store the results.
    ///
    /// Each user draws from its own generator seeded with `seed + user_id`,
    /// so the output does not depend on the order users are processed in.
    pub fn populate(
        profiles: &[PersonnelProfile],
        seed: u64,
        policy: UnknownShiftPolicy,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for profile in profiles {
            if !seen.insert(profile.user_id) {
                return Err(FatigueError::invalid_param(format!(
                    "duplicate profile for user {}",
                    profile.user_id
                )));
            }
        }

        info!(users = profiles.len(), seed, "populating personnel store");
        let roster_generator = RosterGenerator::new(policy);

        let generated: Vec<Personnel> = profiles
            .par_iter()
            .map(|profile| {
                let mut rng = user_rng(seed, profile.user_id);
                let personnel = profile.generate(&roster_generator, &mut rng)?;
                debug!(user_id = profile.user_id, "generated personnel data");
                Ok(personnel)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut store = Self::new();
        for personnel in generated {
            store.insert(personnel);
        }
        Ok(store)
    }

    /// Insert or replace a record, returning the previous one
    pub fn insert(&mut self, personnel: Personnel) -> Option<Personnel> {
        self.personnel.insert(personnel.user_id, personnel)
    }

    /// Borrow a record without cloning
    pub fn personnel(&self, user_id: UserId) -> Option<&Personnel> {
        self.personnel.get(&user_id)
    }

    pub fn len(&self) -> usize {
        self.personnel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personnel.is_empty()
    }
}

impl PersonnelRepository for InMemoryPersonnelStore {
    fn get(&self, user_id: UserId) -> Option<Personnel> {
        self.personnel.get(&user_id).cloned()
    }

    fn user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.personnel.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Generator for one user's synthetic data
pub fn user_rng(seed: u64, user_id: UserId) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add(user_id as u64))
}

/// The configured seed, or a fresh one from entropy. Logged either way so a
/// run can be replayed with `--seed`.
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    match configured {
        Some(seed) => seed,
        None => {
            let seed = rand::random();
            info!(seed, "no seed configured, drew one from entropy");
            seed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Role};

    #[test]
    fn test_populate_demo_profiles() {
        let store = InMemoryPersonnelStore::populate(&demo_profiles(), 42, UnknownShiftPolicy::OffDay).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.user_ids(), vec![1, 2, 3]);

        let first = store.get(1).unwrap();
        assert_eq!(first.roster_info.as_ref().unwrap().roster_days.len(), 30);
        assert!(store.get(3).unwrap().sleep_info.is_none());
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_populate_is_reproducible() {
        let profiles = demo_profiles();
        let a = InMemoryPersonnelStore::populate(&profiles, 7, UnknownShiftPolicy::OffDay).unwrap();
        let b = InMemoryPersonnelStore::populate(&profiles, 7, UnknownShiftPolicy::OffDay).unwrap();

        for id in [1, 2] {
            let left = a.personnel(id).unwrap();
            let right = b.personnel(id).unwrap();
            assert_eq!(
                left.sleep_info.as_ref().unwrap().sleep_records,
                right.sleep_info.as_ref().unwrap().sleep_records
            );
            assert_eq!(
                left.exercise_info.as_ref().unwrap().entries(),
                right.exercise_info.as_ref().unwrap().entries()
            );
        }
    }

    #[test]
    fn test_user_data_independent_of_profile_order() {
        let profiles = demo_profiles();
        let mut reversed = profiles.clone();
        reversed.reverse();

        let a = InMemoryPersonnelStore::populate(&profiles, 11, UnknownShiftPolicy::OffDay).unwrap();
        let b = InMemoryPersonnelStore::populate(&reversed, 11, UnknownShiftPolicy::OffDay).unwrap();
        assert_eq!(
            a.personnel(2).unwrap().exercise_info.as_ref().unwrap().entries(),
            b.personnel(2).unwrap().exercise_info.as_ref().unwrap().entries()
        );
    }

    #[test]
    fn test_duplicate_profiles_rejected() {
        let mut profiles = demo_profiles();
        profiles.push(profiles[0].clone());
        let result = InMemoryPersonnelStore::populate(&profiles, 1, UnknownShiftPolicy::OffDay);
        assert!(matches!(result, Err(FatigueError::InvalidParameter(_))));
    }

    #[test]
    fn test_strict_policy_surfaces_unknown_codes() {
        let mut profiles = demo_profiles();
        if let Some(plan) = profiles[0].roster.as_mut() {
            plan.shift_sequence.push("X".to_string());
        }
        let result = InMemoryPersonnelStore::populate(&profiles, 1, UnknownShiftPolicy::Reject);
        assert!(matches!(result, Err(FatigueError::UnknownShiftCode { .. })));
    }

    #[test]
    fn test_insert_replaces() {
        let mut store = InMemoryPersonnelStore::new();
        assert!(store.is_empty());
        assert!(store
            .insert(Personnel::new(5, Role::AirTrafficController, 30, Gender::Male))
            .is_none());
        let previous = store.insert(Personnel::new(5, Role::AirTrafficController, 31, Gender::Male));
        assert_eq!(previous.unwrap().age, 30);
        assert_eq!(store.get(5).unwrap().age, 31);
    }

    #[test]
    fn test_resolve_seed_prefers_configured() {
        assert_eq!(resolve_seed(Some(123)), 123);
    }
}

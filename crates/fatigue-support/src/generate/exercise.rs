use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use super::{day_count, days_inclusive, round2};
use crate::error::Result;
use crate::models::{ExerciseCollection, ExerciseEntry, ExerciseType, UserId};

const SEDENTARY_CALORIES_PER_HOUR: f64 = 80.0;
const LIGHT_CALORIES_PER_HOUR: f64 = 200.0;

/// Rolls below this are rest days
const REST_DAY_CUTOFF: f64 = 0.2;
/// Rolls below this (and above the rest cutoff) are normal active days
const NORMAL_DAY_CUTOFF: f64 = 0.6;

/// Shape of the activity bout on an active day
struct ActivityBand {
    hours: (f64, f64),
    steps_per_hour: (u32, u32),
}

const NORMAL_DAY: ActivityBand = ActivityBand {
    hours: (0.5, 1.0),
    steps_per_hour: (3000, 7000),
};

const VERY_ACTIVE_DAY: ActivityBand = ActivityBand {
    hours: (1.5, 2.5),
    steps_per_hour: (4000, 7500),
};

/// Generate one Sedentary entry per day plus an optional Light activity bout,
/// then summarise the whole range.
pub fn generate_exercise_data<R: Rng + ?Sized>(
    user_id: UserId,
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> Result<ExerciseCollection> {
    let total_days = day_count(start, end)?;
    let mut entries = Vec::new();

    for date in days_inclusive(start, end)? {
        entries.push(sedentary_entry(date, rng));

        let roll: f64 = rng.gen();
        let band = if roll < REST_DAY_CUTOFF {
            None
        } else if roll < NORMAL_DAY_CUTOFF {
            Some(&NORMAL_DAY)
        } else {
            Some(&VERY_ACTIVE_DAY)
        };

        if let Some(band) = band {
            entries.push(activity_entry(date, band, rng));
        }
    }

    debug!(user_id, days = total_days, entries = entries.len(), "generated exercise data");
    ExerciseCollection::new(user_id, entries, total_days)
}

fn sedentary_entry<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> ExerciseEntry {
    let hours = rng.gen_range(6.0..=9.0);
    ExerciseEntry {
        start: date,
        end: date,
        exercise_type: ExerciseType::Sedentary,
        duration_hours: round2(hours),
        calories_burned: (hours * SEDENTARY_CALORIES_PER_HOUR) as u32,
        steps_taken: None,
    }
}

fn activity_entry<R: Rng + ?Sized>(date: NaiveDate, band: &ActivityBand, rng: &mut R) -> ExerciseEntry {
    let hours = rng.gen_range(band.hours.0..=band.hours.1);
    let steps_per_hour = rng.gen_range(band.steps_per_hour.0..=band.steps_per_hour.1);
    let jitter = rng.gen_range(0.9..=1.1);

    ExerciseEntry {
        start: date,
        end: date,
        exercise_type: ExerciseType::Light,
        duration_hours: round2(hours),
        calories_burned: (hours * LIGHT_CALORIES_PER_HOUR * jitter) as u32,
        steps_taken: Some((hours * steps_per_hour as f64) as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FatigueError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
    }

    #[test]
    fn test_one_sedentary_and_at_most_one_light_per_day() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let collection = generate_exercise_data(1, date(1), date(30), &mut rng).unwrap();

        let mut per_day: HashMap<NaiveDate, (u32, u32)> = HashMap::new();
        for entry in collection.entries() {
            assert_eq!(entry.start, entry.end);
            let counts = per_day.entry(entry.start).or_default();
            match entry.exercise_type {
                ExerciseType::Sedentary => counts.0 += 1,
                ExerciseType::Light => counts.1 += 1,
            }
        }
        assert_eq!(per_day.len(), 30);
        for (day, (sedentary, light)) in per_day {
            assert_eq!(sedentary, 1, "day {}", day);
            assert!(light <= 1, "day {}", day);
        }
    }

    #[test]
    fn test_entry_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let collection = generate_exercise_data(1, date(1), date(30), &mut rng).unwrap();

        for entry in collection.entries() {
            match entry.exercise_type {
                ExerciseType::Sedentary => {
                    assert!((6.0..=9.0).contains(&entry.duration_hours));
                    assert!(entry.calories_burned >= 480 && entry.calories_burned <= 720);
                    assert_eq!(entry.steps_taken, None);
                }
                ExerciseType::Light => {
                    assert!((0.5..=2.5).contains(&entry.duration_hours));
                    assert!(entry.duration_hours <= 1.0 || entry.duration_hours >= 1.5);
                    let steps = entry.steps_taken.unwrap();
                    assert!(steps >= 1500 && steps <= 18750);
                    assert!(entry.calories_burned >= 89 && entry.calories_burned <= 550);
                }
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = generate_exercise_data(1, date(1), date(14), &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        let second = generate_exercise_data(1, date(1), date(14), &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        assert_eq!(first.entries(), second.entries());
        assert_eq!(first.summary(), second.summary());
    }

    #[test]
    fn test_initial_summary_covers_full_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let collection = generate_exercise_data(5, date(1), date(30), &mut rng).unwrap();
        let summary = collection.summary();
        assert_eq!(collection.user_id, 5);
        assert_eq!(summary.summary_period, 30);
        assert_eq!(summary.start_date, date(1));
        assert_eq!(summary.end_date, date(30));
        assert!(summary.average_sedentary_duration.is_some());
    }

    #[test]
    fn test_invalid_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = generate_exercise_data(1, date(2), date(1), &mut rng);
        assert!(matches!(result, Err(FatigueError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_formulas_against_replayed_draws() {
        let generated = generate_exercise_data(1, date(1), date(10), &mut ChaCha8Rng::seed_from_u64(21)).unwrap();
        let mut entries = generated.entries().iter();

        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut active_days = 0;
        for day in 1..=10 {
            let sedentary_hours: f64 = rng.gen_range(6.0..=9.0);
            let sedentary = entries.next().unwrap();
            assert_eq!(sedentary.start, date(day));
            assert_eq!(sedentary.exercise_type, ExerciseType::Sedentary);
            assert_eq!(sedentary.duration_hours, round2(sedentary_hours));
            assert_eq!(sedentary.calories_burned, (sedentary_hours * 80.0).floor() as u32);

            let roll: f64 = rng.gen();
            let band = if roll < 0.2 {
                continue;
            } else if roll < 0.6 {
                ((0.5, 1.0), (3000u32, 7000u32))
            } else {
                ((1.5, 2.5), (4000u32, 7500u32))
            };
            let hours: f64 = rng.gen_range(band.0 .0..=band.0 .1);
            let steps_per_hour: u32 = rng.gen_range(band.1 .0..=band.1 .1);
            let jitter: f64 = rng.gen_range(0.9..=1.1);

            let light = entries.next().unwrap();
            assert_eq!(light.start, date(day));
            assert_eq!(light.exercise_type, ExerciseType::Light);
            assert_eq!(light.duration_hours, round2(hours));
            assert_eq!(light.calories_burned, (hours * 200.0 * jitter).floor() as u32);
            assert_eq!(light.steps_taken, Some((hours * steps_per_hour as f64).floor() as u32));
            active_days += 1;
        }

        assert!(entries.next().is_none());
        assert!(active_days > 0);
    }
}

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use tracing::debug;

use super::{day_count, days_inclusive};
use crate::error::Result;
use crate::models::{SleepCollection, SleepRecord, SleepType, UserId};

/// Bedtime as hours after the night's midnight: 22:30 to 01:30 the next day
const BEDTIME_HOURS: (f64, f64) = (22.5, 25.5);
/// Nightly sleep target in hours, wake time excluded
const TARGET_SLEEP_HOURS: (f64, f64) = (6.5, 8.5);

const LIGHT_STAGE_HOURS: [f64; 3] = [0.25, 0.5, 0.75];
const DEEP_STAGE_HOURS: [f64; 3] = [0.5, 0.75, 1.0];
const REM_STAGE_HOURS: [f64; 3] = [0.25, 0.5, 0.75];

const WAKE_PROBABILITY: f64 = 0.2;
const WAKE_HOURS: f64 = 0.25;

/// Generate a night of Light -> Deep -> REM cycles for every date in range,
/// then summarise the whole range.
pub fn generate_sleep_data<R: Rng + ?Sized>(
    user_id: UserId,
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> Result<SleepCollection> {
    let total_days = day_count(start, end)?;
    let mut records = Vec::new();

    for date in days_inclusive(start, end)? {
        generate_night(date, rng, &mut records);
    }

    debug!(user_id, nights = total_days, records = records.len(), "generated sleep data");
    let mut collection = SleepCollection::new(user_id, records);
    collection.refresh_summary(total_days)?;
    Ok(collection)
}

fn generate_night<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R, records: &mut Vec<SleepRecord>) {
    let bedtime_minutes = (rng.gen_range(BEDTIME_HOURS.0..=BEDTIME_HOURS.1) * 60.0).round() as i64;
    let bedtime = date.and_time(NaiveTime::MIN) + Duration::minutes(bedtime_minutes);
    let target = rng.gen_range(TARGET_SLEEP_HOURS.0..=TARGET_SLEEP_HOURS.1);

    record_night(date, bedtime, target, || draw_cycle(&mut *rng), records);
}

/// One Light -> Deep -> REM cycle, sometimes followed by a wake stage
fn draw_cycle<R: Rng + ?Sized>(rng: &mut R) -> Vec<(SleepType, f64)> {
    let mut cycle = vec![
        (SleepType::Light, pick(rng, &LIGHT_STAGE_HOURS)),
        (SleepType::Deep, pick(rng, &DEEP_STAGE_HOURS)),
        (SleepType::Rem, pick(rng, &REM_STAGE_HOURS)),
    ];
    if rng.gen::<f64>() < WAKE_PROBABILITY {
        cycle.push((SleepType::Wake, WAKE_HOURS));
    }
    cycle
}

/// Record consecutive stages from `bedtime` until `target` hours of sleep
/// are reached. Once the target is met no further sleep stage is recorded,
/// but a wake stage still reached in the same cycle is.
fn record_night<F>(
    date: NaiveDate,
    bedtime: NaiveDateTime,
    target: f64,
    mut next_cycle: F,
    records: &mut Vec<SleepRecord>,
) where
    F: FnMut() -> Vec<(SleepType, f64)>,
{
    let mut clock = bedtime;
    let mut accumulated = 0.0;

    while accumulated < target {
        for (sleep_type, hours) in next_cycle() {
            if accumulated >= target && sleep_type.is_asleep() {
                break;
            }

            let start_time = clock.time();
            clock += Duration::minutes((hours * 60.0) as i64);

            records.push(SleepRecord {
                date,
                sleep_type,
                start_time,
                end_time: clock.time(),
                duration_hours: hours,
                is_main_sleep: true,
            });

            if sleep_type.is_asleep() {
                accumulated += hours;
            }
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[f64]) -> f64 {
    options[rng.gen_range(0..options.len())]
}

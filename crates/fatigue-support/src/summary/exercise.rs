use super::{mean, sample_std_dev, Window};
use crate::error::Result;
use crate::models::{ExerciseEntry, ExerciseSummary};

/// Summarise exercise entries over a lookback window.
///
/// Exercise hours and calories cover every entry. Steps only cover entries
/// that recorded them, and sedentary duration only Sedentary entries, so both
/// come back as `None` when the window holds no such entry.
pub fn summarise_exercise(entries: &[ExerciseEntry], lookback_days: u32) -> Result<ExerciseSummary> {
    let window = Window::select(entries, lookback_days)?;

    let hours: Vec<f64> = window.entries.iter().map(|e| e.duration_hours).collect();
    let calories: Vec<f64> = window
        .entries
        .iter()
        .map(|e| e.calories_burned as f64)
        .collect();
    let steps: Vec<f64> = window
        .entries
        .iter()
        .filter_map(|e| e.steps_taken)
        .map(|s| s as f64)
        .collect();
    let sedentary: Vec<f64> = window
        .entries
        .iter()
        .filter(|e| e.is_sedentary())
        .map(|e| e.duration_hours)
        .collect();

    Ok(ExerciseSummary {
        summary_period: lookback_days,
        start_date: window.start,
        end_date: window.end,
        average_exercise_hours: mean(&hours).unwrap_or(0.0),
        exercise_hours_std_dev: sample_std_dev(&hours).unwrap_or(0.0),
        average_calories_burned: mean(&calories).unwrap_or(0.0),
        calories_burned_std_dev: sample_std_dev(&calories).unwrap_or(0.0),
        average_steps_taken: mean(&steps),
        steps_taken_std_dev: sample_std_dev(&steps),
        average_sedentary_duration: mean(&sedentary),
        sedentary_duration_std_dev: sample_std_dev(&sedentary),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FatigueError;
    use crate::models::ExerciseType;
    use chrono::NaiveDate;

    fn entry(day: u32, exercise_type: ExerciseType, hours: f64, calories: u32, steps: Option<u32>) -> ExerciseEntry {
        let date = NaiveDate::from_ymd_opt(2025, 9, day).unwrap();
        ExerciseEntry {
            start: date,
            end: date,
            exercise_type,
            duration_hours: hours,
            calories_burned: calories,
            steps_taken: steps,
        }
    }

    #[test]
    fn test_empty_entries_error() {
        let result = summarise_exercise(&[], 7);
        assert!(matches!(result, Err(FatigueError::EmptyWindow)));
    }

    #[test]
    fn test_single_entry_has_zero_std_dev() {
        let entries = vec![entry(1, ExerciseType::Sedentary, 7.0, 560, None)];
        let summary = summarise_exercise(&entries, 7).unwrap();
        assert_eq!(summary.average_exercise_hours, 7.0);
        assert_eq!(summary.exercise_hours_std_dev, 0.0);
        assert_eq!(summary.calories_burned_std_dev, 0.0);
        assert_eq!(summary.sedentary_duration_std_dev, Some(0.0));
    }

    #[test]
    fn test_no_activity_leaves_steps_null() {
        let entries = vec![
            entry(1, ExerciseType::Sedentary, 6.0, 480, None),
            entry(2, ExerciseType::Sedentary, 8.0, 640, None),
        ];
        let summary = summarise_exercise(&entries, 7).unwrap();
        assert_eq!(summary.average_steps_taken, None);
        assert_eq!(summary.steps_taken_std_dev, None);
        assert_eq!(summary.average_sedentary_duration, Some(7.0));
    }

    #[test]
    fn test_sedentary_separate_from_exercise_hours() {
        let entries = vec![
            entry(1, ExerciseType::Sedentary, 8.0, 640, None),
            entry(1, ExerciseType::Light, 1.0, 200, Some(5000)),
            entry(2, ExerciseType::Sedentary, 6.0, 480, None),
            entry(2, ExerciseType::Light, 2.0, 400, Some(9000)),
        ];
        let summary = summarise_exercise(&entries, 7).unwrap();
        assert_eq!(summary.average_exercise_hours, 4.25);
        assert_eq!(summary.average_sedentary_duration, Some(7.0));
        assert_eq!(summary.average_steps_taken, Some(7000.0));
        assert_eq!(summary.average_calories_burned, 430.0);
        let steps_sd = summary.steps_taken_std_dev.unwrap();
        assert!((steps_sd - 2828.4271247461903).abs() < 1e-9);
    }

    #[test]
    fn test_window_bounds_follow_entries() {
        let entries = vec![
            entry(1, ExerciseType::Sedentary, 6.0, 480, None),
            entry(5, ExerciseType::Sedentary, 6.0, 480, None),
            entry(9, ExerciseType::Sedentary, 9.0, 720, None),
        ];
        let summary = summarise_exercise(&entries, 4).unwrap();
        assert_eq!(summary.summary_period, 4);
        assert_eq!(summary.start_date, NaiveDate::from_ymd_opt(2025, 9, 5).unwrap());
        assert_eq!(summary.end_date, NaiveDate::from_ymd_opt(2025, 9, 9).unwrap());
        assert_eq!(summary.average_exercise_hours, 7.5);
    }

    #[test]
    fn test_lookback_past_calendar_start() {
        let entries = vec![
            entry(1, ExerciseType::Sedentary, 6.0, 480, None),
            entry(2, ExerciseType::Sedentary, 7.0, 560, None),
            entry(3, ExerciseType::Sedentary, 8.0, 640, None),
        ];
        let summary = summarise_exercise(&entries, u32::MAX).unwrap();
        assert_eq!(summary.summary_period, u32::MAX);
        assert_eq!(summary.start_date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(summary.end_date, NaiveDate::from_ymd_opt(2025, 9, 3).unwrap());
        assert_eq!(summary.average_exercise_hours, 7.0);
    }
}

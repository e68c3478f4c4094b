//! Progress calculations over set history.
//!
//! All functions here are pure and recompute from the full history they are
//! given; nothing is updated incrementally.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use super::types::{ExerciseProgress, StrengthScore, Trend};
use crate::workouts::WorkoutSet;

/// Number of sets in each trend window.
pub const TREND_WINDOW: usize = 5;

/// Relative volume change treated as a real trend.
pub const TREND_THRESHOLD: f64 = 0.05;

/// Cap for the consistency sub-score.
pub const CONSISTENCY_CAP: f64 = 50.0;
/// Cap for the one-rep-max sub-score.
pub const ONE_REP_MAX_CAP: f64 = 30.0;
/// Cap for the volume sub-score.
pub const VOLUME_CAP: f64 = 20.0;

/// Points per distinct training day in the consistency window.
const POINTS_PER_TRAINING_DAY: f64 = 5.0;
/// Days looked back for consistency.
const CONSISTENCY_WINDOW_DAYS: i64 = 30;
/// Kilograms of estimated 1RM per point.
const KG_PER_ONE_REP_MAX_POINT: f64 = 10.0;
/// Kilograms of total volume per point.
const KG_PER_VOLUME_POINT: f64 = 1000.0;

/// Estimate a one-rep max with the Epley formula.
///
/// A single rep is already a max, so `reps == 1` returns `weight` unchanged.
pub fn calculate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps == 0 || weight <= 0.0 {
        return 0.0;
    }
    if reps == 1 {
        return weight;
    }
    weight * (1.0 + reps as f64 / 30.0)
}

/// Compare mean volume of the last [`TREND_WINDOW`] completed sets with the
/// window before it.
pub fn calculate_trend(sets: &[WorkoutSet]) -> Trend {
    let volumes: Vec<f64> = sets
        .iter()
        .filter(|s| s.completed)
        .map(WorkoutSet::volume)
        .collect();

    if volumes.len() < TREND_WINDOW * 2 {
        return Trend::Stable;
    }

    let split = volumes.len() - TREND_WINDOW;
    let recent = mean(&volumes[split..]);
    let previous = mean(&volumes[split - TREND_WINDOW..split]);

    if previous <= 0.0 {
        return if recent > 0.0 {
            Trend::Increasing
        } else {
            Trend::Stable
        };
    }

    let change = (recent - previous) / previous;
    if change > TREND_THRESHOLD {
        Trend::Increasing
    } else if change < -TREND_THRESHOLD {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Recompute progress for one exercise from its set history.
///
/// Incomplete sets are ignored.
pub fn calculate_exercise_progress(exercise_id: &str, sets: &[WorkoutSet]) -> ExerciseProgress {
    let completed: Vec<&WorkoutSet> = sets.iter().filter(|s| s.completed).collect();

    completed.iter().fold(
        ExerciseProgress {
            trend: calculate_trend(sets),
            ..ExerciseProgress::empty(exercise_id)
        },
        |mut progress, set| {
            let volume = set.volume();
            progress.total_sets += 1;
            progress.max_weight = progress.max_weight.max(set.weight);
            progress.max_reps = progress.max_reps.max(set.reps);
            progress.max_volume = progress.max_volume.max(volume);
            progress.estimated_one_rep_max = progress
                .estimated_one_rep_max
                .max(calculate_one_rep_max(set.weight, set.reps));
            progress.total_volume += volume;
            progress.last_performed = match progress.last_performed {
                Some(last) if last >= set.logged_at => Some(last),
                _ => Some(set.logged_at),
            };
            progress
        },
    )
}

/// Composite strength score from every logged set.
///
/// - consistency: 5 points per distinct training day in the 30 days up to
///   `now`, capped at 50
/// - one-rep max: 1 point per 10 kg of the best estimate, capped at 30
/// - volume: 1 point per 1000 kg lifted in total, capped at 20
pub fn calculate_strength_score(sets: &[WorkoutSet], now: DateTime<Utc>) -> StrengthScore {
    let window_start = now - Duration::days(CONSISTENCY_WINDOW_DAYS);

    let mut training_days = HashSet::new();
    let mut best_one_rep_max: f64 = 0.0;
    let mut total_volume = 0.0;

    for set in sets.iter().filter(|s| s.completed) {
        if set.logged_at >= window_start && set.logged_at <= now {
            training_days.insert(set.logged_at.date_naive());
        }
        best_one_rep_max = best_one_rep_max.max(calculate_one_rep_max(set.weight, set.reps));
        total_volume += set.volume();
    }

    let consistency =
        (training_days.len() as f64 * POINTS_PER_TRAINING_DAY).min(CONSISTENCY_CAP);
    let one_rep_max = (best_one_rep_max / KG_PER_ONE_REP_MAX_POINT).min(ONE_REP_MAX_CAP);
    let volume = (total_volume / KG_PER_VOLUME_POINT).min(VOLUME_CAP);

    StrengthScore {
        consistency,
        one_rep_max,
        volume,
        total: consistency + one_rep_max + volume,
    }
}

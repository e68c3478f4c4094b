//! Workout progress aggregation.
//!
//! Derives per-exercise metrics (maxima, Epley one-rep max, volume trend)
//! and a composite strength score from append-only set history.

pub mod calculator;
pub mod tracker;
pub mod types;

pub use calculator::{
    calculate_exercise_progress, calculate_one_rep_max, calculate_strength_score, calculate_trend,
    CONSISTENCY_CAP, ONE_REP_MAX_CAP, TREND_THRESHOLD, TREND_WINDOW, VOLUME_CAP,
};
pub use tracker::ProgressTracker;
pub use types::{ExerciseProgress, ProgressError, ProgressResult, StrengthScore, Trend};

//! Progress types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::DatabaseError;

/// Direction of recent training volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Recent volume more than 5% above the previous window
    Increasing,
    /// Within ±5%, or not enough history
    #[default]
    Stable,
    /// Recent volume more than 5% below the previous window
    Decreasing,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Stable => write!(f, "stable"),
            Trend::Decreasing => write!(f, "decreasing"),
        }
    }
}

/// Derived metrics for one exercise, regenerated from its full set history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgress {
    /// Exercise identifier
    pub exercise_id: String,
    /// Number of completed sets
    pub total_sets: usize,
    /// Heaviest completed set (kg)
    pub max_weight: f64,
    /// Most reps in a completed set
    pub max_reps: u32,
    /// Largest single-set volume (weight × reps)
    pub max_volume: f64,
    /// Best Epley one-rep-max estimate
    pub estimated_one_rep_max: f64,
    /// Sum of completed set volumes
    pub total_volume: f64,
    /// Volume trend of the last 5 sets vs. the 5 before
    pub trend: Trend,
    /// Most recent completed set
    pub last_performed: Option<DateTime<Utc>>,
}

impl ExerciseProgress {
    /// Progress for an exercise with no completed sets.
    pub fn empty(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            total_sets: 0,
            max_weight: 0.0,
            max_reps: 0,
            max_volume: 0.0,
            estimated_one_rep_max: 0.0,
            total_volume: 0.0,
            trend: Trend::Stable,
            last_performed: None,
        }
    }
}

/// Composite strength score out of 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthScore {
    /// Training-day consistency, capped at 50
    pub consistency: f64,
    /// Best estimated one-rep-max, capped at 30
    pub one_rep_max: f64,
    /// Total volume, capped at 20
    pub volume: f64,
    /// Sum of the three sub-scores
    pub total: f64,
}

/// Progress tracking errors.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The set cannot be logged.
    #[error("Invalid set: {0}")]
    InvalidSet(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

/// Result type for progress operations.
pub type ProgressResult<T> = Result<T, ProgressError>;

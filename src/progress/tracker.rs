//! Storage-backed progress tracking.

use chrono::{DateTime, Utc};

use super::calculator::{calculate_exercise_progress, calculate_strength_score};
use super::types::{ExerciseProgress, ProgressError, ProgressResult, StrengthScore};
use crate::storage::keys::{exercise_progress_key, exercise_sets_key, EXERCISE_SETS_PREFIX};
use crate::storage::Database;
use crate::workouts::WorkoutSet;

/// Logs sets into per-exercise histories and keeps derived progress fresh.
pub struct ProgressTracker<'a> {
    db: &'a Database,
}

impl<'a> ProgressTracker<'a> {
    /// Create a new tracker over a database.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Append a set to its exercise history and return recomputed progress.
    pub fn log_set(&self, set: &WorkoutSet) -> ProgressResult<ExerciseProgress> {
        validate_set(set)?;

        let count = self.db.append_json(&exercise_sets_key(&set.exercise_id), set)?;
        tracing::debug!(
            "Logged set {} for {} ({} sets stored)",
            set.id,
            set.exercise_id,
            count
        );

        let progress = self.progress_for(&set.exercise_id)?;
        self.db
            .set_json(&exercise_progress_key(&set.exercise_id), &progress)?;

        if set.completed {
            tracing::info!(
                "{}: est. 1RM {:.1} kg, trend {}",
                set.exercise_id,
                progress.estimated_one_rep_max,
                progress.trend
            );
        }

        Ok(progress)
    }

    /// Full set history for an exercise, in logged order.
    pub fn sets_for(&self, exercise_id: &str) -> ProgressResult<Vec<WorkoutSet>> {
        Ok(self.db.get_list(&exercise_sets_key(exercise_id))?)
    }

    /// Progress for an exercise, regenerated from its history.
    pub fn progress_for(&self, exercise_id: &str) -> ProgressResult<ExerciseProgress> {
        let sets = self.sets_for(exercise_id)?;
        Ok(calculate_exercise_progress(exercise_id, &sets))
    }

    /// Last cached progress for an exercise, if any set has been logged.
    pub fn cached_progress(&self, exercise_id: &str) -> ProgressResult<Option<ExerciseProgress>> {
        Ok(self.db.get_json(&exercise_progress_key(exercise_id))?)
    }

    /// IDs of all exercises with a stored history.
    pub fn tracked_exercises(&self) -> ProgressResult<Vec<String>> {
        Ok(self
            .db
            .keys_with_prefix(EXERCISE_SETS_PREFIX)?
            .into_iter()
            .map(|key| key[EXERCISE_SETS_PREFIX.len()..].to_string())
            .collect())
    }

    /// Progress for every tracked exercise.
    pub fn all_progress(&self) -> ProgressResult<Vec<ExerciseProgress>> {
        self.tracked_exercises()?
            .iter()
            .map(|id| self.progress_for(id))
            .collect()
    }

    /// Strength score across every tracked exercise.
    pub fn strength_score(&self, now: DateTime<Utc>) -> ProgressResult<StrengthScore> {
        let mut all_sets = Vec::new();
        for id in self.tracked_exercises()? {
            all_sets.extend(self.sets_for(&id)?);
        }
        Ok(calculate_strength_score(&all_sets, now))
    }
}

fn validate_set(set: &WorkoutSet) -> ProgressResult<()> {
    if set.exercise_id.trim().is_empty() {
        return Err(ProgressError::InvalidSet("exercise id is empty".to_string()));
    }
    if !set.weight.is_finite() || set.weight < 0.0 {
        return Err(ProgressError::InvalidSet(format!(
            "weight must be a non-negative number, got {}",
            set.weight
        )));
    }
    if let Some(rpe) = set.rpe {
        if !(1.0..=10.0).contains(&rpe) {
            return Err(ProgressError::InvalidSet(format!(
                "RPE must be between 1 and 10, got {}",
                rpe
            )));
        }
    }
    Ok(())
}

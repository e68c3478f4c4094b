//! Workout types: logged sets and finished sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged set.
///
/// Sets are persisted once and never edited on disk afterwards; a correction
/// is logged as a new set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    /// Unique identifier
    pub id: String,
    /// Exercise this set belongs to
    pub exercise_id: String,
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Whether the set was completed
    pub completed: bool,
    /// Time under tension / hold duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Rate of perceived exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f32>,
    /// When the set was logged
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}

impl WorkoutSet {
    /// Create a completed set logged now.
    pub fn new(exercise_id: impl Into<String>, weight: f64, reps: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            exercise_id: exercise_id.into(),
            weight,
            reps,
            completed: true,
            duration: None,
            rpe: None,
            logged_at: Utc::now(),
        }
    }

    /// Set the RPE.
    pub fn with_rpe(mut self, rpe: f32) -> Self {
        self.rpe = Some(rpe);
        self
    }

    /// Set the duration in seconds.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Set the logging timestamp.
    pub fn logged_at(mut self, at: DateTime<Utc>) -> Self {
        self.logged_at = at;
        self
    }

    /// Weight × reps.
    pub fn volume(&self) -> f64 {
        self.weight * self.reps as f64
    }
}

/// An exercise performed within a session, with its sets in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    /// Exercise identifier
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Sets in the order they were performed
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl SessionExercise {
    /// Create an exercise entry with no sets.
    pub fn new(exercise_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            name: name.into(),
            notes: None,
            sets: Vec::new(),
        }
    }

    /// Completed sets only.
    pub fn completed_sets(&self) -> impl Iterator<Item = &WorkoutSet> {
        self.sets.iter().filter(|s| s.completed)
    }
}

/// A finished workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Unique identifier
    pub id: String,
    /// Workout name
    pub name: String,
    /// Workout notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Session start
    pub started_at: DateTime<Utc>,
    /// Session end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    /// Exercises in the order performed
    #[serde(default)]
    pub exercises: Vec<SessionExercise>,
}

impl WorkoutSession {
    /// Create a session starting at `started_at`.
    pub fn new(name: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            notes: None,
            started_at,
            ended_at: None,
            exercises: Vec::new(),
        }
    }

    /// Build a session from logged sets, grouping by exercise in first-seen
    /// order. The session spans the earliest to the latest set.
    pub fn from_sets(name: impl Into<String>, sets: Vec<WorkoutSet>) -> Option<Self> {
        let started_at = sets.iter().map(|s| s.logged_at).min()?;
        let ended_at = sets.iter().map(|s| s.logged_at).max();

        let mut session = Self::new(name, started_at);
        session.ended_at = ended_at;

        for set in sets {
            match session
                .exercises
                .iter_mut()
                .find(|e| e.exercise_id == set.exercise_id)
            {
                Some(exercise) => exercise.sets.push(set),
                None => {
                    let mut exercise =
                        SessionExercise::new(set.exercise_id.clone(), set.exercise_id.clone());
                    exercise.sets.push(set);
                    session.exercises.push(exercise);
                }
            }
        }

        Some(session)
    }

    /// Number of completed sets across all exercises.
    pub fn completed_set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.completed_sets().count()).sum()
    }

    /// Total completed volume across all exercises.
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|e| e.completed_sets())
            .map(WorkoutSet::volume)
            .sum()
    }

    /// Session duration in seconds, if finished.
    pub fn duration_seconds(&self) -> Option<i64> {
        self.ended_at
            .map(|end| (end - self.started_at).num_seconds().max(0))
    }
}

//! Workout session history persisted under `@workout_sessions`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::storage::database::{Database, DatabaseError};
use crate::storage::keys::WORKOUT_SESSIONS_KEY;
use crate::workouts::{WorkoutSession, WorkoutSet};

/// Store for finished workout sessions.
pub struct SessionStore<'a> {
    db: &'a Database,
}

impl<'a> SessionStore<'a> {
    /// Create a new session store over a database.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Append a finished session. Returns the number of stored sessions.
    pub fn save(&self, session: &WorkoutSession) -> Result<usize, DatabaseError> {
        let count = self.db.append_json(WORKOUT_SESSIONS_KEY, session)?;
        tracing::info!(
            "Saved session '{}' ({} sets), {} sessions stored",
            session.name,
            session.completed_set_count(),
            count
        );
        Ok(count)
    }

    /// All sessions in the order they were saved.
    pub fn all(&self) -> Result<Vec<WorkoutSession>, DatabaseError> {
        self.db.get_list(WORKOUT_SESSIONS_KEY)
    }

    /// Find a session by ID.
    pub fn get(&self, id: &str) -> Result<Option<WorkoutSession>, DatabaseError> {
        Ok(self.all()?.into_iter().find(|s| s.id == id))
    }

    /// Sessions started within `[from, to)`, oldest first.
    pub fn between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<WorkoutSession>, DatabaseError> {
        let mut sessions: Vec<_> = self
            .all()?
            .into_iter()
            .filter(|s| s.started_at >= from && s.started_at < to)
            .collect();
        sessions.sort_by_key(|s| s.started_at);
        Ok(sessions)
    }

    /// Drop sets that already belong to a stored session.
    pub fn unsaved_sets(&self, sets: Vec<WorkoutSet>) -> Result<Vec<WorkoutSet>, DatabaseError> {
        let saved: HashSet<String> = self
            .all()?
            .into_iter()
            .flat_map(|session| session.exercises)
            .flat_map(|exercise| exercise.sets)
            .map(|set| set.id)
            .collect();

        Ok(sets.into_iter().filter(|set| !saved.contains(&set.id)).collect())
    }
}

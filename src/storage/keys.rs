//! Storage key conventions.

use chrono::NaiveDate;

/// Key holding the array of finished workout sessions.
pub const WORKOUT_SESSIONS_KEY: &str = "@workout_sessions";

/// Prefix of the per-exercise append-only set arrays.
pub const EXERCISE_SETS_PREFIX: &str = "@exercise_sets_";

/// Prefix of the cached, derived per-exercise progress.
pub const EXERCISE_PROGRESS_PREFIX: &str = "@exercise_progress_";

/// Prefix of the per-day nutrition logs.
pub const NUTRITION_PREFIX: &str = "nutrition_";

/// Key for the set history of an exercise.
pub fn exercise_sets_key(exercise_id: &str) -> String {
    format!("{}{}", EXERCISE_SETS_PREFIX, exercise_id)
}

/// Key for the cached progress of an exercise.
pub fn exercise_progress_key(exercise_id: &str) -> String {
    format!("{}{}", EXERCISE_PROGRESS_PREFIX, exercise_id)
}

/// Key for a day's nutrition log (`nutrition_YYYY-MM-DD`).
pub fn nutrition_key(date: NaiveDate) -> String {
    format!("{}{}", NUTRITION_PREFIX, date.format("%Y-%m-%d"))
}

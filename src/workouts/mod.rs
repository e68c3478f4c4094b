//! Workout data: logged sets and finished sessions.

pub mod types;

pub use types::{SessionExercise, WorkoutSession, WorkoutSet};

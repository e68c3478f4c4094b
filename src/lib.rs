//! FitCoach - fitness coaching core
//!
//! Non-UI logic behind a fitness-coaching app: workout set logging with
//! derived progress metrics, sunrise/sunset times, daily nutrition tracking,
//! Hevy-compatible CSV export and a client for the coach agent backend.

pub mod agent;
pub mod export;
pub mod nutrition;
pub mod progress;
pub mod solar;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use agent::AgentClient;
pub use progress::{calculate_one_rep_max, ProgressTracker};
pub use solar::{calculate_sun_times, SunTimes};
pub use storage::config::AppConfig;
pub use storage::Database;
pub use workouts::{WorkoutSession, WorkoutSet};

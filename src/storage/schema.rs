//! Database schema definitions for FitCoach.

/// SQL schema for the flat key-value store.
///
/// Every persisted value is a JSON document addressed by a string key,
/// e.g. `@workout_sessions`, `@exercise_sets_<id>` or `nutrition_<date>`.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_kv_store_updated_at ON kv_store(updated_at);
"#;

/// Schema version table for migrations.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

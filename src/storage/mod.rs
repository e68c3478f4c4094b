//! Storage module for the key-value database and configuration.

pub mod config;
pub mod database;
pub mod keys;
pub mod schema;
pub mod session_store;

pub use config::{
    AgentSettings, AppConfig, ConfigError, ExportSettings, LocationSettings, NutritionGoals,
};
pub use database::{Database, DatabaseError};
pub use session_store::SessionStore;

//! Application configuration loaded from TOML.

use crate::solar::Coordinates;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the stored agent token.
pub const AGENT_TOKEN_ENV: &str = "FITCOACH_AGENT_TOKEN";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Coach agent backend settings
    pub agent: AgentSettings,
    /// Default location for sun times
    pub location: LocationSettings,
    /// Daily nutrition goals
    pub nutrition: NutritionGoals,
    /// Export settings
    pub export: ExportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            agent: AgentSettings::default(),
            location: LocationSettings::default(),
            nutrition: NutritionGoals::default(),
            export: ExportSettings::default(),
        }
    }
}

/// Coach agent backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Base URL of the backend, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Timeout for the single retry of a timed-out chat request
    pub chat_retry_timeout_secs: u64,
    /// Bearer token, if logged in
    pub token: Option<String>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 15,
            chat_retry_timeout_secs: 60,
            token: None,
        }
    }
}

/// Default location used by the sun times command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    /// Latitude in degrees (north positive)
    pub latitude: f64,
    /// Longitude in degrees (east positive)
    pub longitude: f64,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

impl LocationSettings {
    /// Coordinates for the solar calculator.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Daily nutrition goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionGoals {
    /// Calories (kcal)
    pub calories: u32,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2200,
            protein_g: 150.0,
            carbs_g: 250.0,
            fat_g: 70.0,
        }
    }
}

/// Export-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Append the RPE column to Hevy exports
    pub include_rpe: bool,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fitcoach", "FitCoach")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Get the database file path.
pub fn get_database_path() -> PathBuf {
    get_data_dir().join("fitcoach.db")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from a file, falling back to defaults when absent.
///
/// The agent token from [`AGENT_TOKEN_ENV`] takes precedence over the file.
pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    let mut config = if path.exists() {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        AppConfig::default()
    };

    if let Ok(token) = std::env::var(AGENT_TOKEN_ENV) {
        if !token.is_empty() {
            config.agent.token = Some(token);
        }
    }

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a file.
pub fn save_config_to(config: &AppConfig, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

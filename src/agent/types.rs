//! Agent client types and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for agent backend calls.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Backend answered with a non-2xx status other than 404
    #[error("Backend returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Request did not complete within its timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request or response body could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::Serialization(err.to_string())
    }
}

/// Chat message sent to the coach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// User message
    pub message: String,
    /// Conversation to continue, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Extra context for the coach (recent workouts, goals)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl ChatRequest {
    /// Create a chat request.
    pub fn new(message: &str, conversation_id: Option<&str>) -> Self {
        Self {
            message: message.to_string(),
            conversation_id: conversation_id.map(str::to_string),
            context: None,
        }
    }
}

/// Coach reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Reply text
    #[serde(alias = "response")]
    pub reply: String,
    /// Conversation the reply belongs to
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Agent that produced the reply (multi-agent endpoint)
    #[serde(default)]
    pub agent: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Health status string, e.g. "ok"
    pub status: String,
    /// Backend version
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    /// Whether the backend reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.to_ascii_lowercase().as_str(), "ok" | "healthy" | "up")
    }
}

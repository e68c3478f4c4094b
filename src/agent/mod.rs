//! Coach agent backend client.

pub mod client;
pub mod types;

pub use client::{is_chat_path, AgentClient, AGENT_CHAT_PATH, HEALTH_PATH, MULTI_AGENT_CHAT_PATH};
pub use types::{AgentError, ChatRequest, ChatResponse, HealthStatus};

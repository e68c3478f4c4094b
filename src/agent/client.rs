//! Coach agent backend client.
//!
//! JSON over HTTP with an optional bearer token. A request that times out on
//! a chat path is retried exactly once with a longer timeout.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Method};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use super::types::{AgentError, ChatRequest, ChatResponse, HealthStatus};
use crate::storage::AgentSettings;

/// Single-agent chat endpoint.
pub const AGENT_CHAT_PATH: &str = "/api/agent/chat";

/// Multi-agent chat endpoint.
pub const MULTI_AGENT_CHAT_PATH: &str = "/api/multi-agent/chat";

/// Health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Client for the coach agent backend.
///
/// Clones share the bearer token, so a login on one handle is seen by all.
#[derive(Clone)]
pub struct AgentClient {
    /// HTTP client
    http: reqwest::Client,
    /// Base URL without trailing slash
    base_url: String,
    /// Bearer token, if logged in
    token: Arc<RwLock<Option<String>>>,
    /// Timeout for a normal request
    timeout: Duration,
    /// Timeout for the one retry of a timed-out chat request
    chat_retry_timeout: Duration,
}

impl AgentClient {
    /// Create a client from configuration.
    pub fn from_settings(settings: &AgentSettings) -> Result<Self, AgentError> {
        let mut client = Self::with_timeouts(
            &settings.base_url,
            Duration::from_secs(settings.timeout_secs),
            Duration::from_secs(settings.chat_retry_timeout_secs),
        )?;
        client.token = Arc::new(RwLock::new(settings.token.clone()));
        Ok(client)
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(
        base_url: &str,
        timeout: Duration,
        chat_retry_timeout: Duration,
    ) -> Result<Self, AgentError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AgentError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AgentError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token: Arc::new(RwLock::new(None)),
            timeout,
            chat_retry_timeout,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the bearer token used for subsequent requests.
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    /// Drop the bearer token.
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    /// Whether a bearer token is set.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Send a request and decode the JSON response.
    ///
    /// Returns `Ok(None)` on 404. Any other non-2xx status is an
    /// [`AgentError::Status`] carrying the response body.
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<R>, AgentError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.send(method.clone(), path, body, self.timeout).await {
            Err(AgentError::Timeout) if is_chat_path(path) => {
                tracing::warn!(
                    "Request to {} timed out after {:?}, retrying with {:?}",
                    path,
                    self.timeout,
                    self.chat_retry_timeout
                );
                self.send(method, path, body, self.chat_retry_timeout).await
            }
            result => result,
        }
    }

    /// Send a single HTTP request.
    async fn send<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        timeout: Duration,
    ) -> Result<Option<R>, AgentError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method, &url)
            .timeout(timeout)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("{} returned 404", path);
            return Ok(None);
        }

        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(AgentError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let payload = if text.trim().is_empty() { "null" } else { &text };
        Ok(Some(serde_json::from_str(payload)?))
    }

    /// Send a message to the coach agent.
    pub async fn chat(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<Option<ChatResponse>, AgentError> {
        let request = ChatRequest::new(message, conversation_id);
        self.request(Method::POST, AGENT_CHAT_PATH, Some(&request))
            .await
    }

    /// Send a message to the multi-agent coach team.
    pub async fn multi_agent_chat(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<Option<ChatResponse>, AgentError> {
        let request = ChatRequest::new(message, conversation_id);
        self.request(Method::POST, MULTI_AGENT_CHAT_PATH, Some(&request))
            .await
    }

    /// Check backend health.
    pub async fn health(&self) -> Result<Option<HealthStatus>, AgentError> {
        self.request::<(), _>(Method::GET, HEALTH_PATH, None).await
    }
}

fn map_transport_error(e: reqwest::Error) -> AgentError {
    if e.is_timeout() {
        AgentError::Timeout
    } else if e.is_decode() {
        AgentError::Serialization(e.to_string())
    } else {
        AgentError::Network(e.to_string())
    }
}

/// Whether any path segment names a chat endpoint.
pub fn is_chat_path(path: &str) -> bool {
    path.split(|c: char| c == '/' || c == '?')
        .any(|segment| segment.to_ascii_lowercase().contains("chat"))
}

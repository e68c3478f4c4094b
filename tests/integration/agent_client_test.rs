//! Integration tests for the agent client against a mock backend.

use std::time::Duration;

use fitcoach::agent::{AgentClient, AgentError, AGENT_CHAT_PATH, HEALTH_PATH, MULTI_AGENT_CHAT_PATH};
use serde_json::{json, Value};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> AgentClient {
    AgentClient::with_timeouts(&server.uri(), Duration::from_millis(300), Duration::from_secs(5))
        .unwrap()
}

#[tokio::test]
async fn test_chat_sends_bearer_token_and_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(AGENT_CHAT_PATH))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "Add a rest day",
            "conversation_id": "c1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.set_token("secret-token").await;

    let reply = client.chat("Plan my week", None).await.unwrap().unwrap();
    assert_eq!(reply.reply, "Add a rest day");
    assert_eq!(reply.conversation_id.as_deref(), Some("c1"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["message"], "Plan my week");
    assert!(body.get("conversation_id").is_none());
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let server = MockServer::start().await;

    // Mounted first so it wins whenever an Authorization header is sent
    Mock::given(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(HEALTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let status = client(&server).health().await.unwrap().unwrap();
    assert!(status.is_healthy());
}

#[tokio::test]
async fn test_not_found_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MULTI_AGENT_CHAT_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not Found" })))
        .mount(&server)
        .await;

    let result = client(&server).multi_agent_chat("hi", Some("c1")).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(AGENT_CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "model overloaded" })),
        )
        .mount(&server)
        .await;

    match client(&server).chat("hi", None).await {
        Err(AgentError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("model overloaded"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chat_timeout_is_retried_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(AGENT_CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "reply": "too late" }))
                .set_delay(Duration::from_secs(1)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(AGENT_CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "second try", "agent": "strength" })),
        )
        .mount(&server)
        .await;

    let reply = client(&server).chat("hello", None).await.unwrap().unwrap();
    assert_eq!(reply.reply, "second try");
    assert_eq!(reply.agent.as_deref(), Some("strength"));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_non_chat_timeout_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(HEALTH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ok" }))
                .set_delay(Duration::from_secs(1)),
        )
        .mount(&server)
        .await;

    let result = client(&server).health().await;
    assert!(matches!(result, Err(AgentError::Timeout)));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client =
        AgentClient::with_timeouts(&url, Duration::from_millis(300), Duration::from_secs(5))
            .unwrap();
    let result = client.health().await;
    assert!(matches!(result, Err(AgentError::Network(_))));
}

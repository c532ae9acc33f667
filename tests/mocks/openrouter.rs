//! Mock OpenRouter API server

#![allow(dead_code)]

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Mock OpenRouter server
pub struct MockOpenRouter {
    server: MockServer,
}

impl MockOpenRouter {
    /// Start a new mock server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URI of the mock server
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Access the underlying wiremock server for custom expectations
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Mount a chat completion response with an arbitrary JSON body
    pub async fn mock_chat_completion(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a non-JSON chat completion response
    pub async fn mock_chat_completion_non_json(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "text/html"),
            )
            .mount(&self.server)
            .await;
    }

    /// All requests received by the mock
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

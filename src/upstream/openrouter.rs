//! OpenRouter chat completions client

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::upstream::client::{send_json, UpstreamError, UpstreamJson};
use crate::upstream::image_router::bearer_headers;

/// OpenRouter API client
pub struct OpenRouterClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatCompletionPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<&'a Value>,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.open_router_url.clone(),
            api_key: config.open_router_api_key.clone(),
        }
    }

    /// Forward a chat completion request
    pub async fn chat_completions(
        &self,
        api_key: Option<&str>,
        model: Option<&str>,
        messages: Option<&Value>,
    ) -> Result<UpstreamJson, UpstreamError> {
        let url = format!("{}/chat/completions", self.base_url);
        let key = api_key.or(self.api_key.as_deref());

        info!(
            url = %url,
            model = model.unwrap_or("<none>"),
            key_present = key.is_some(),
            "Forwarding chat completion request to OpenRouter"
        );

        let payload = ChatCompletionPayload { model, messages };
        send_json(
            self.client
                .post(&url)
                .headers(bearer_headers(key))
                .json(&payload),
        )
        .await
    }
}

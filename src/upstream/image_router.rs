//! ImageRouter (MyQA) client
//!
//! Forwards image generation and chat completion requests to the
//! ImageRouter API. The image generation endpoint always uses a fixed
//! model; the chat endpoint forwards whatever model the caller named.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::upstream::client::{send_json, UpstreamError, UpstreamJson};

/// Model identifier injected into every image generation request
pub const IMAGE_MODEL: &str = "google/gemini-2.0-flash-exp:free";

/// ImageRouter API client
pub struct ImageRouterClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ImageGenerationPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
    model: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<&'a Value>,
}

impl ImageRouterClient {
    /// Create a new ImageRouter client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.image_router_url.clone(),
            api_key: config.image_router_api_key.clone(),
        }
    }

    /// Generate an image, injecting the fixed model identifier
    pub async fn generate_image(
        &self,
        api_key: Option<&str>,
        prompt: Option<&str>,
    ) -> Result<UpstreamJson, UpstreamError> {
        let url = format!("{}/images/generations", self.base_url);
        let key = self.resolve_key(api_key);

        info!(
            url = %url,
            model = IMAGE_MODEL,
            key_present = key.is_some(),
            "Forwarding image generation request to ImageRouter"
        );

        let payload = ImageGenerationPayload {
            prompt,
            model: IMAGE_MODEL,
        };
        send_json(
            self.client
                .post(&url)
                .headers(bearer_headers(key))
                .json(&payload),
        )
        .await
    }

    /// Forward a chat completion request
    pub async fn chat_completions(
        &self,
        api_key: Option<&str>,
        model: Option<&str>,
        messages: Option<&Value>,
    ) -> Result<UpstreamJson, UpstreamError> {
        let url = format!("{}/chat/completions", self.base_url);
        let key = self.resolve_key(api_key);

        info!(
            url = %url,
            model = model.unwrap_or("<none>"),
            key_present = key.is_some(),
            "Forwarding chat completion request to ImageRouter"
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

    /// Caller-supplied key wins; the server-held key is the fallback
    fn resolve_key<'a>(&'a self, override_key: Option<&'a str>) -> Option<&'a str> {
        override_key.or(self.api_key.as_deref())
    }
}

/// Build JSON + bearer authorization headers
///
/// With no resolvable credential the Authorization header is omitted and
/// the call proceeds anyway; the upstream rejects it with its own status.
pub(crate) fn bearer_headers(api_key: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {key}")) {
            headers.insert(AUTHORIZATION, value);
        }
    }
    headers
}

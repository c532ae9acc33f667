//! Perplexity search client
//!
//! Forwards conversational search requests to Perplexity's chat
//! completions API. The model is forced to `sonar` regardless of caller
//! input, and there is no per-request credential override: the route fails
//! fast when no server-held key is configured.

use reqwest::header::{HeaderValue, ACCEPT};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::upstream::client::{send_json, UpstreamError, UpstreamJson};
use crate::upstream::image_router::bearer_headers;

/// Model identifier forced onto every Perplexity request
pub const SEARCH_MODEL: &str = "sonar";

/// Perplexity API client
pub struct PerplexityClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct SearchPayload<'a> {
    model: &'a str,
    messages: &'a Value,
    stream: bool,
}

impl PerplexityClient {
    /// Create a new Perplexity client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.perplexity_url.clone(),
            api_key: config.perplexity_api_key.clone(),
        }
    }

    /// Check whether a server-held API key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Forward a conversational search request
    pub async fn search(
        &self,
        messages: &Value,
        stream: bool,
    ) -> Result<UpstreamJson, UpstreamError> {
        let url = format!("{}/chat/completions", self.base_url);

        info!(
            url = %url,
            model = SEARCH_MODEL,
            stream = stream,
            "Forwarding search request to Perplexity"
        );

        let payload = SearchPayload {
            model: SEARCH_MODEL,
            messages,
            stream,
        };
        let mut headers = bearer_headers(self.api_key.as_deref());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        send_json(self.client.post(&url).headers(headers).json(&payload)).await
    }
}

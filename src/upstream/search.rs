//! Web search clients
//!
//! Primary provider is Serper (authenticated with an `X-API-KEY` header,
//! not a bearer token). When no Serper key is configured the relay falls
//! back to the unauthenticated DuckDuckGo Instant Answer API.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::upstream::client::{send_json, UpstreamError, UpstreamJson};

/// Number of results requested from Serper
const SERPER_RESULT_COUNT: u32 = 5;

/// Search provider client pair
pub struct SearchClient {
    client: reqwest::Client,
    serper_url: String,
    duckduckgo_url: String,
    serper_api_key: Option<String>,
}

#[derive(Serialize)]
struct SerperPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    num: u32,
}

impl SearchClient {
    /// Create a new search client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            serper_url: config.serper_url.clone(),
            duckduckgo_url: config.duckduckgo_url.clone(),
            serper_api_key: config.serper_api_key.clone(),
        }
    }

    /// Check whether the primary (Serper) provider is configured
    pub fn has_primary(&self) -> bool {
        self.serper_api_key.is_some()
    }

    /// Query the primary provider
    pub async fn serper(&self, query: Option<&str>) -> Result<UpstreamJson, UpstreamError> {
        let url = format!("{}/search", self.serper_url);

        info!(url = %url, "Forwarding search request to Serper");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = self.serper_api_key.as_deref() {
            if let Ok(value) = HeaderValue::from_str(key) {
                headers.insert("X-API-KEY", value);
            }
        }

        let payload = SerperPayload {
            q: query,
            num: SERPER_RESULT_COUNT,
        };
        send_json(self.client.post(&url).headers(headers).json(&payload)).await
    }

    /// Query the unauthenticated fallback provider
    pub async fn duckduckgo(&self, query: &str) -> Result<UpstreamJson, UpstreamError> {
        let url = format!("{}/", self.duckduckgo_url);

        info!(url = %url, "Forwarding search request to DuckDuckGo fallback");

        send_json(self.client.get(&url).query(&[
            ("q", query),
            ("format", "json"),
            ("no_redirect", "1"),
            ("no_html", "1"),
        ]))
        .await
    }
}

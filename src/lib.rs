//! Courier - HTTP relay for browser-originated AI and search requests
//!
//! Courier forwards requests from a browser client to several third-party
//! APIs (ImageRouter/MyQA, OpenRouter, Perplexity, and Serper with a
//! DuckDuckGo fallback), injecting server-held credentials and normalizing
//! a couple of response shapes. Each route performs exactly one outbound
//! call and answers with the upstream's status code.

pub mod config;
pub mod error;
pub mod routes;
pub mod upstream;

use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{RelayError, RelayResult};
pub use crate::upstream::{
    ImageRouterClient, OpenRouterClient, PerplexityClient, SearchClient,
};

/// Application state shared across all request handlers
///
/// Constructed once at startup and passed by reference into each handler.
/// Nothing in here is mutable: configuration and credentials are read at
/// startup, and the upstream clients share one pooled HTTP client.
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub start_time: Instant,
    pub image_router: ImageRouterClient,
    pub openrouter: OpenRouterClient,
    pub perplexity: PerplexityClient,
    pub search: SearchClient,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // One pooled client for all upstreams. No request timeout: each
        // outbound call is awaited to completion, matching the relay's
        // one-shot dispatch contract.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let image_router = ImageRouterClient::new(http_client.clone(), &config);
        let openrouter = OpenRouterClient::new(http_client.clone(), &config);
        let perplexity = PerplexityClient::new(http_client.clone(), &config);
        let search = SearchClient::new(http_client.clone(), &config);

        Ok(Self {
            config,
            http_client,
            start_time: Instant::now(),
            image_router,
            openrouter,
            perplexity,
            search,
        })
    }
}

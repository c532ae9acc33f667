//! Configuration management for Courier
//!
//! Configuration is loaded from environment variables. Credentials are
//! optional: a missing key means the matching relay route forwards without
//! a server-held fallback (or, for search, switches to the free fallback
//! provider).

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Directory served as static assets
    pub static_dir: String,

    /// ImageRouter (MyQA) API base URL
    pub image_router_url: String,
    /// Server-held ImageRouter API key (fallback when the caller sends none)
    pub image_router_api_key: Option<String>,

    /// OpenRouter API base URL
    pub open_router_url: String,
    /// Server-held OpenRouter API key
    pub open_router_api_key: Option<String>,

    /// Serper search API base URL
    pub serper_url: String,
    /// Serper API key; absence selects the DuckDuckGo fallback
    pub serper_api_key: Option<String>,

    /// DuckDuckGo Instant Answer API base URL (unauthenticated fallback)
    pub duckduckgo_url: String,

    /// Perplexity API base URL
    pub perplexity_url: String,
    /// Perplexity API key; this route has no per-request override
    pub perplexity_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("COURIER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("COURIER_PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("Invalid COURIER_PORT")?,

            static_dir: env::var("COURIER_STATIC_DIR").unwrap_or_else(|_| "public".to_string()),

            image_router_url: env::var("IMAGE_ROUTER_API_URL")
                .unwrap_or_else(|_| "https://ir-api.myqa.cc/v1/openai".to_string()),
            image_router_api_key: env::var("IMAGE_ROUTER_API_KEY").ok(),

            open_router_url: env::var("OPEN_ROUTER_API_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string()),
            open_router_api_key: env::var("OPEN_ROUTER_API_KEY").ok(),

            serper_url: env::var("SERPER_API_URL")
                .unwrap_or_else(|_| "https://google.serper.dev".to_string()),
            serper_api_key: env::var("SERPER_API_KEY").ok(),

            duckduckgo_url: env::var("DUCKDUCKGO_API_URL")
                .unwrap_or_else(|_| "https://api.duckduckgo.com".to_string()),

            perplexity_url: env::var("PERPLEXITY_API_URL")
                .unwrap_or_else(|_| "https://api.perplexity.ai".to_string()),
            perplexity_api_key: env::var("PERPLEXITY_API_KEY").ok(),
        })
    }
}

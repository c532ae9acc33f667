//! Upstream provider clients
//!
//! One thin client per third-party API, all sharing the read-text-then-parse
//! plumbing in [`client`].

pub mod client;
pub mod image_router;
pub mod openrouter;
pub mod perplexity;
pub mod search;

pub use client::{UpstreamError, UpstreamJson};
pub use image_router::ImageRouterClient;
pub use openrouter::OpenRouterClient;
pub use perplexity::PerplexityClient;
pub use search::SearchClient;

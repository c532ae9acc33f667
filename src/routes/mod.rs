//! HTTP routes for Courier
//!
//! This module defines all HTTP endpoints exposed by the relay and
//! assembles the router: permissive CORS for browser callers, request
//! tracing, a 10 MB JSON body ceiling, and static asset serving as the
//! fallback.

pub mod chat;
pub mod health;
pub mod image;
pub mod perplexity;
pub mod search;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

/// Maximum accepted inbound body size (10 MB)
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS is deliberately wide open: the relay exists so browser pages
    // can reach credentialed APIs without holding the credentials.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/myqa/image/generate", post(image::generate_image))
        .route("/myqa/chat/completions", post(chat::myqa_chat_completions))
        .route(
            "/openrouter/chat/completions",
            post(chat::openrouter_chat_completions),
        )
        .route("/search", post(search::search))
        .route("/myqa/perplexity/search", post(perplexity::perplexity_search))
        .route("/health", get(health::health_check))
        .fallback_service(static_assets)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

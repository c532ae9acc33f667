//! Perplexity conversational search relay route
//!
//! `POST /myqa/perplexity/search` is the only route with fail-fast
//! behavior: it requires a server-held credential (no per-request
//! override) and a non-empty `messages` array. It is also the only route
//! that echoes the upstream's own status code on a non-JSON upstream
//! response, together with a full diagnostic envelope.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::{
    error::{RelayError, RelayResult},
    upstream::{client::headers_to_json, UpstreamError},
    AppState,
};

/// Inbound Perplexity search request
#[derive(Debug, Deserialize)]
pub struct PerplexitySearchRequest {
    pub messages: Option<Value>,
    pub stream: Option<bool>,
}

/// Handle Perplexity search relay requests
pub async fn perplexity_search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PerplexitySearchRequest>,
) -> RelayResult<Response> {
    if !state.perplexity.is_configured() {
        error!("PERPLEXITY_API_KEY not set for /myqa/perplexity/search");
        return Err(RelayError::MissingCredential(
            "Configuration error: PERPLEXITY_API_KEY not set on server.".to_string(),
        ));
    }

    let messages = match request.messages {
        Some(ref m) if m.as_array().is_some_and(|a| !a.is_empty()) => m,
        _ => {
            return Err(RelayError::InvalidRequest(
                "Invalid request: 'messages' array is required for Perplexity search."
                    .to_string(),
            ))
        }
    };
    let stream = request.stream.unwrap_or(false);

    let upstream = state
        .perplexity
        .search(messages, stream)
        .await
        .map_err(|e| match e {
            UpstreamError::NonJson {
                status,
                headers,
                body,
                ..
            } => RelayError::UpstreamNonJson {
                status: status.as_u16(),
                headers: headers_to_json(&headers),
                body,
            },
            UpstreamError::Transport(e) => {
                RelayError::proxy("Perplexity proxy internal server error", e)
            }
        })?;

    info!(status = %upstream.status, "Perplexity API responded");

    Ok((upstream.status, Json(upstream.body)).into_response())
}

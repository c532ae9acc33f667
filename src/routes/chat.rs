//! Chat completion relay routes
//!
//! `POST /myqa/chat/completions` and `POST /openrouter/chat/completions`
//! forward the caller's `targetModel`/`targetMessages` pair to the matching
//! provider as `model`/`messages` and pass the parsed response through with
//! the upstream's status code. No structural validation is applied to the
//! inbound fields; absent fields are simply omitted from the outbound body.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    error::{RelayError, RelayResult},
    upstream::UpstreamError,
    AppState,
};

/// Inbound chat relay request, shared by both chat routes
#[derive(Debug, Deserialize)]
pub struct ChatRelayRequest {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
    #[serde(rename = "targetModel")]
    pub target_model: Option<String>,
    #[serde(rename = "targetMessages")]
    pub target_messages: Option<Value>,
}

/// Handle chat completion relay requests to ImageRouter
pub async fn myqa_chat_completions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRelayRequest>,
) -> RelayResult<Response> {
    info!(
        model = request.target_model.as_deref().unwrap_or("<none>"),
        key_present = request.api_key.is_some(),
        "Received chat completion relay request"
    );

    let upstream = state
        .image_router
        .chat_completions(
            request.api_key.as_deref(),
            request.target_model.as_deref(),
            request.target_messages.as_ref(),
        )
        .await
        .map_err(|e| match e {
            UpstreamError::NonJson { status, .. } => {
                warn!(status = %status, "Non-JSON response from chat completions");
                RelayError::proxy("Proxy error", "Non-JSON response from chat completions")
            }
            UpstreamError::Transport(e) => RelayError::proxy("Proxy error", e),
        })?;

    info!(status = %upstream.status, "Chat completion response received");

    Ok((upstream.status, Json(upstream.body)).into_response())
}

/// Handle chat completion relay requests to OpenRouter
pub async fn openrouter_chat_completions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRelayRequest>,
) -> RelayResult<Response> {
    info!(
        model = request.target_model.as_deref().unwrap_or("<none>"),
        key_present = request.api_key.is_some(),
        "Received OpenRouter chat completion relay request"
    );

    let upstream = state
        .openrouter
        .chat_completions(
            request.api_key.as_deref(),
            request.target_model.as_deref(),
            request.target_messages.as_ref(),
        )
        .await
        .map_err(|e| match e {
            // This route has no dedicated raw-text branch: a non-JSON body
            // surfaces as a generic proxy failure carrying the decode error.
            UpstreamError::NonJson { parse_error, .. } => RelayError::proxy(
                "Proxy error",
                format!("error decoding response body: {parse_error}"),
            ),
            UpstreamError::Transport(e) => RelayError::proxy("Proxy error", e),
        })?;

    Ok((upstream.status, Json(upstream.body)).into_response())
}

//! Image generation relay route
//!
//! `POST /myqa/image/generate` forwards to the ImageRouter image API and
//! normalizes inline base64 image payloads into the shape the browser
//! client renders directly. Every other upstream response is forwarded
//! verbatim with the upstream's status code.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    error::{RelayError, RelayResult},
    upstream::UpstreamError,
    AppState,
};

/// Inbound image generation request
#[derive(Debug, Deserialize)]
pub struct ImageGenerationRequest {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
    pub prompt: Option<String>,
}

/// Handle image generation relay requests
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImageGenerationRequest>,
) -> RelayResult<Response> {
    info!(
        key_present = request.api_key.is_some(),
        "Received request at /myqa/image/generate"
    );

    let upstream = state
        .image_router
        .generate_image(request.api_key.as_deref(), request.prompt.as_deref())
        .await
        .map_err(|e| match e {
            UpstreamError::NonJson { status, .. } => {
                warn!(status = %status, "Non-JSON response from ir-api.myqa.cc");
                RelayError::proxy("Proxy error", "Non-JSON response from ir-api.myqa.cc")
            }
            UpstreamError::Transport(e) => RelayError::proxy("Proxy error", e),
        })?;

    info!(status = %upstream.status, "ImageRouter image API responded");

    // Inline base64 payloads are reshaped for the UI and always answered
    // with 200, even when the upstream status says otherwise.
    if let Some(b64) = inline_base64_image(&upstream.body) {
        return Ok((
            StatusCode::OK,
            Json(json!({
                "type": "base64",
                "data": b64,
                "mimeType": "image/png",
            })),
        )
            .into_response());
    }

    Ok((upstream.status, Json(upstream.body)).into_response())
}

/// Extract an inline base64 image from `data[0].b64_json`, if present
fn inline_base64_image(body: &Value) -> Option<&str> {
    body.get("data")?
        .as_array()?
        .first()?
        .get("b64_json")?
        .as_str()
        .filter(|s| !s.is_empty())
}

//! Web search relay route
//!
//! `POST /search` queries Serper when a key is configured and forwards its
//! JSON verbatim. Without a key it falls back to the DuckDuckGo Instant
//! Answer API and reshapes the answer into a one-element organic-result
//! list so the browser client sees a single response shape.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::{RelayError, RelayResult},
    AppState,
};

/// Inbound search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
}

/// Handle web search relay requests
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> RelayResult<Response> {
    info!(
        primary = state.search.has_primary(),
        "Received web search request"
    );

    let body = if state.search.has_primary() {
        let upstream = state
            .search
            .serper(request.query.as_deref())
            .await
            .map_err(|e| RelayError::proxy("Search proxy error", e))?;
        upstream.body
    } else {
        let query = request.query.unwrap_or_default();
        let upstream = state
            .search
            .duckduckgo(&query)
            .await
            .map_err(|e| RelayError::proxy("Search proxy error", e))?;
        organic_fallback(&upstream.body)
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Reshape a DuckDuckGo instant answer into a one-element organic list
fn organic_fallback(answer: &Value) -> Value {
    json!({
        "organic": [{
            "title": answer.get("Heading").cloned().unwrap_or(Value::Null),
            "snippet": answer.get("AbstractText").cloned().unwrap_or(Value::Null),
            "link": answer.get("AbstractURL").cloned().unwrap_or(Value::Null),
        }]
    })
}

//! Error types for Courier
//!
//! Every relay route resolves to either a success payload or a
//! `RelayError`, which is translated into an HTTP status plus a JSON
//! envelope at the route boundary. Envelope shapes match what the browser
//! client expects: `{error}` for input/configuration failures,
//! `{error, details}` for proxy failures, and the diagnostic
//! `{error, details, perplexity_*}` envelope for non-JSON Perplexity
//! responses.
//!
//! Failure-status policy is deliberately per-route: the image, chat,
//! OpenRouter and search routes answer a fixed 500 on any relay-local
//! failure, while the Perplexity route echoes the upstream's own status
//! (502 when unusable) for non-JSON upstream bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

/// Route-level relay errors
#[derive(Debug, Error)]
pub enum RelayError {
    /// Malformed or missing required input from the caller
    #[error("{0}")]
    InvalidRequest(String),

    /// Required server-held credential is absent
    #[error("{0}")]
    MissingCredential(String),

    /// Transport failure, unexpected error, or a non-JSON upstream body on
    /// a route with a fixed-500 failure policy
    #[error("{label}: {details}")]
    Proxy { label: String, details: String },

    /// Non-JSON Perplexity response, carrying the full upstream diagnostic
    #[error("non-JSON response from Perplexity (status {status})")]
    UpstreamNonJson {
        status: u16,
        headers: Value,
        body: String,
    },
}

impl RelayError {
    /// Build a `Proxy` error with a route-specific envelope label
    pub fn proxy(label: impl Into<String>, details: impl ToString) -> Self {
        Self::Proxy {
            label: label.into(),
            details: details.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            RelayError::InvalidRequest(message) => {
                error!(error = %message, "Rejecting invalid relay request");
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            RelayError::MissingCredential(message) => {
                error!(error = %message, "Relay route is not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
            RelayError::Proxy { label, details } => {
                error!(error = %label, details = %details, "Relay request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": label, "details": details }),
                )
            }
            RelayError::UpstreamNonJson {
                status,
                headers,
                body,
            } => {
                error!(
                    perplexity_status = status,
                    raw_body_len = body.len(),
                    "Non-JSON response from Perplexity"
                );
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    json!({
                        "error": format!("Non-JSON response from Perplexity. Status: {status}"),
                        "details": "The Perplexity API did not return valid JSON. This might happen with 404s or other server errors.",
                        "perplexity_status": status,
                        "perplexity_headers": headers,
                        "perplexity_raw_body": body,
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for relay route handlers
pub type RelayResult<T> = Result<T, RelayError>;

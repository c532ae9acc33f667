//! Shared outbound request plumbing
//!
//! Every upstream provider call goes through [`send_json`]: issue the
//! request, read the full body as text, then attempt a JSON parse. A
//! non-2xx status is not an error at this layer, because relay routes
//! forward the upstream's status code verbatim. The only failures here are
//! transport errors and non-JSON bodies.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// A parsed JSON response from an upstream provider
#[derive(Debug)]
pub struct UpstreamJson {
    /// The upstream's own status code
    pub status: StatusCode,
    /// The parsed response body
    pub body: Value,
}

/// Failures producing an `UpstreamJson`
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never completed (connect/read failure)
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered, but the body is not valid JSON
    #[error("upstream returned a non-JSON body (status {status})")]
    NonJson {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
        parse_error: String,
    },
}

/// Send a request and parse the response body as JSON
pub(crate) async fn send_json(request: reqwest::RequestBuilder) -> Result<UpstreamJson, UpstreamError> {
    let response = request.send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let text = response.text().await?;

    debug!(status = %status, body_len = text.len(), "Received upstream response");

    match serde_json::from_str(&text) {
        Ok(body) => Ok(UpstreamJson { status, body }),
        Err(e) => Err(UpstreamError::NonJson {
            status,
            headers,
            body: text,
            parse_error: e.to_string(),
        }),
    }
}

/// Render header map entries as a JSON object for diagnostic envelopes
pub(crate) fn headers_to_json(headers: &HeaderMap) -> Value {
    let map: serde_json::Map<String, Value> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();
    Value::Object(map)
}

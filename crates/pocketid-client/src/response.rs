//! Response classification.
//!
//! Every successful exchange resolves to one of three payload shapes,
//! decided by status code and declared content type. Non-2xx responses
//! never reach `Payload`; they become `ErrorKind::Upstream` carrying the
//! full body text.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Classified body of a successful upstream response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// HTTP 204, or any response with no meaningful body.
    Empty,
    /// The response declared a JSON content type and parsed cleanly.
    Json(serde_json::Value),
    /// Any other content type, returned verbatim.
    Text(String),
}

impl Payload {
    /// Returns true for the empty payload.
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    /// The raw text body, if this payload is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Deserialize a JSON payload into a typed value.
    ///
    /// Fails with a `Json` error when the payload is empty or text, so a
    /// caller expecting structure finds out rather than getting a default.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Json(value) => serde_json::from_value(value).map_err(Into::into),
            Payload::Empty => Err(Error::new(ErrorKind::Json(
                "expected a JSON body, got an empty response".to_string(),
            ))),
            Payload::Text(_) => Err(Error::new(ErrorKind::Json(
                "expected a JSON body, got a non-JSON content type".to_string(),
            ))),
        }
    }
}

/// Classify one upstream response into a payload or an upstream error.
///
/// Order matters: non-2xx first (body read as text into the error), then
/// 204 with no body parsing, then content-type dispatch. Malformed JSON
/// under a JSON content type is a hard failure.
pub(crate) async fn classify(
    response: reqwest::Response,
    method: &reqwest::Method,
    path: &str,
) -> Result<Payload> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::upstream(status.as_u16(), method.as_str(), path, body));
    }

    if status == reqwest::StatusCode::NO_CONTENT {
        return Ok(Payload::Empty);
    }

    let is_json = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));

    let text = response.text().await?;
    if is_json {
        let value = serde_json::from_str(&text)?;
        Ok(Payload::Json(value))
    } else {
        Ok(Payload::Text(text))
    }
}

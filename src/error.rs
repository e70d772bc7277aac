//! Defines the library's error type `AirVisualError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition. Also hosts the
//! response classifier that maps an HTTP status plus a decoded error payload
//! onto a specific `AirVisualError` variant.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// The error enumeration covering every failure a cloud API call can produce.
///
/// `Connect`, `Malformed`, and `Api` are the generic kinds; the remaining
/// API-surfaced variants are specific refinements of them, so callers can
/// match a single variant or fall through to a catch-all arm.
#[derive(Debug, Error)]
pub enum AirVisualError {
    /// Network-level failure from the HTTP client (`reqwest`).
    #[error("Error while communicating with the AirVisual API: {0}")]
    Connect(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON.
    #[error("Response body is not valid JSON: {body}")]
    Malformed {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A parameter failed local validation; no request was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The API rejected the key as incorrect, or the account requires payment.
    #[error("Incorrect API key: {0}")]
    InvalidKey(String),

    /// The API key has expired.
    #[error("API key expired: {0}")]
    KeyExpired(String),

    /// The key is valid but lacks permission for the requested operation.
    #[error("Permission denied: {0}")]
    Unauthorized(String),

    /// The requested city or node does not exist.
    #[error("Requested resource was not found: {0}")]
    NotFound(String),

    /// No monitoring station is available near the requested location.
    #[error("No nearest station available: {0}")]
    NoStation(String),

    /// The account's call limit has been reached.
    #[error("API call limit reached: {0}")]
    LimitReached(String),

    /// Catch-all for non-2xx responses that match no specific rule.
    #[error("AirVisual API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

/// A specialized `Result` type using the library's `AirVisualError`.
pub type Result<T> = std::result::Result<T, AirVisualError>;

type ErrorCtor = fn(String) -> AirVisualError;

/// Message-substring rules, evaluated top to bottom against the normalized
/// error message. A message match always outranks the status-only rules
/// below; within the table, the more specific substrings come first.
const MESSAGE_RULES: &[(&str, ErrorCtor)] = &[
    ("incorrect api key", AirVisualError::InvalidKey),
    ("key expired", AirVisualError::KeyExpired),
    ("payment required", AirVisualError::InvalidKey),
    ("permission denied", AirVisualError::Unauthorized),
    ("forbidden", AirVisualError::Unauthorized),
    ("city not found", AirVisualError::NotFound),
    ("node not found", AirVisualError::NotFound),
    ("no nearest station", AirVisualError::NoStation),
    ("call limit reached", AirVisualError::LimitReached),
    ("too many requests", AirVisualError::LimitReached),
];

/// Turns a non-success response into the matching `AirVisualError`.
///
/// Successful statuses pass through untouched. Anything else is classified by
/// the error message first and the status code second, falling back to the
/// generic `Api` variant when nothing matches.
pub(crate) fn classify(status: StatusCode, body: &Value) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    let message = error_message(body);
    // The API spells messages with underscores ("city_not_found"); normalize
    // so the rule table can use plain words.
    let normalized = message.to_ascii_lowercase().replace('_', " ");

    for (needle, to_error) in MESSAGE_RULES {
        if normalized.contains(needle) {
            return Err(to_error(message));
        }
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(AirVisualError::LimitReached(message));
    }

    Err(AirVisualError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Extracts the human-readable message from an error payload.
///
/// The general API nests it as `data.message`; the node API returns `data` as
/// a bare string. Unrecognized shapes fall back to the serialized body so the
/// message is never empty.
fn error_message(body: &Value) -> String {
    match body.get("data") {
        Some(Value::Object(data)) => data
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned),
        Some(Value::String(message)) => Some(message.clone()),
        _ => None,
    }
    .or_else(|| body.get("message").and_then(Value::as_str).map(str::to_owned))
    .unwrap_or_else(|| body.to_string())
}

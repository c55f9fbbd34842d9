//! Error type for calls against the recorder backend.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failure of a single backend round trip.
///
/// `Status` displays as the bare backend message so it can be put in front of
/// the user unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("Could not reach the recorder ({path}): {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Build a status error from a non-success response body, preferring the
    /// backend's `detail` and falling back to the status text.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.is_empty());

        let message = detail.unwrap_or_else(|| status_text(status));
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Message to show for a failed call, or `fallback` when the error has none.
pub fn user_message(err: &ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

//! API client errors.
//!
//! Every failure ends up as one string in the UI, so there is no finer
//! taxonomy than what is needed to build that string.

use serde::Deserialize;
use thiserror::Error;

use super::http::HttpResponse;

/// Shown when the backend's error body carries no usable message.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, ...)
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx response body did not match the expected record shape
    #[error("invalid response from server: {0}")]
    Decode(String),

    /// The request payload could not be encoded
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Error body shape used by the backend: `{"detail": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Build a status error, taking the message from the body's non-empty `detail` string.
    pub fn from_response(response: &HttpResponse) -> Self {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| {
                body.detail
                    .as_str()
                    .filter(|detail| !detail.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

        ApiError::Status {
            status: response.status,
            message,
        }
    }

    /// Text shown inline in a view.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Error taxonomy shared by the data client, the page assembler and the HTTP
//! boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Every way a page request can fail.
///
/// Upstream failures are reported as 500s and request validation failures as
/// 400s. The message is passed through to the client as plain text.
#[derive(Debug, Error)]
pub enum PokeError {
    /// Upstream answered with a non-success status.
    #[error("API returned a non-OK status code: {code} {reason}")]
    UpstreamStatus { code: u16, reason: String },

    /// Upstream could not be reached or the body could not be read.
    #[error(transparent)]
    UpstreamUnavailable(reqwest::Error),

    /// Upstream body did not have the expected JSON shape.
    #[error(transparent)]
    Decode(serde_json::Error),

    /// An inbound request parameter was rejected before any upstream call.
    #[error("{0}")]
    Validation(String),
}

impl PokeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus { .. } | Self::UpstreamUnavailable(_) | Self::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for PokeError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamUnavailable(err)
    }
}

impl From<serde_json::Error> for PokeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

impl IntoResponse for PokeError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PokeError>;

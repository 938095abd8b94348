//! Errors raised while forwarding `/api` requests.
//!
//! Responses use the backend's envelope shape so the client's response
//! interpreter reads the message the same way it reads backend errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// The backend could not be reached or closed the connection.
    #[error("backend unavailable: {0}")]
    Upstream(String),

    /// The backend did not answer within the configured timeout.
    #[error("backend timed out")]
    Timeout,

    /// The incoming request body could not be read.
    #[error("request body unreadable: {0}")]
    RequestBody(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

#[derive(Serialize)]
struct Envelope {
    code: u16,
    message: String,
    data: Option<()>,
    errors: Option<()>,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "api proxy failed");
        let body = Envelope { code: status.as_u16(), message: self.to_string(), data: None, errors: None };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

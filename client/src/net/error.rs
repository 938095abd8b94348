//! Typed failures for REST calls and their user-facing text.
//!
//! ERROR HANDLING
//! ==============
//! Every request resolves to `Result<T, ApiError>`. The request layer turns
//! errors into toasts and a 401 into a session logout; pages only need
//! [`auth_error_message`] when they want context-specific wording.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// No response within the request timeout.
    #[error("request timed out")]
    Timeout,
    /// Non-2xx HTTP status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 2xx HTTP status but the envelope `code` was not 200.
    #[error("{message}")]
    Rejected { code: i64, message: String },
    /// The response body was not the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR render or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, falling back to the envelope code when it looks like one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Rejected { code, .. } => u16::try_from(*code).ok().filter(|c| (400..600).contains(c)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Backend-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } | Self::Rejected { message, .. } if !message.is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    /// Text shown in the error toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } | Self::Rejected { message, .. } if message.is_empty() => {
                "Request error".to_owned()
            }
            other => other.to_string(),
        }
    }
}

/// Which auth flow an error came from; selects the wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthContext {
    Login,
    Register,
    InitAdmin,
    SystemStatus,
}

/// Whether a backend message reports that the administrator already exists.
pub fn is_admin_exists(err: &ApiError) -> bool {
    err.status() == Some(400)
        && err.server_message().is_some_and(|m| {
            let lower = m.to_ascii_lowercase();
            lower.contains("already exists") || m.contains("已存在")
        })
}

/// Context-specific, user-friendly description of an auth failure.
pub fn auth_error_message(err: &ApiError, context: AuthContext) -> String {
    match context {
        AuthContext::Login | AuthContext::Register => credential_error_message(err),
        AuthContext::InitAdmin => init_admin_error_message(err),
        AuthContext::SystemStatus => system_status_error_message(err),
    }
}

fn credential_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(400) if is_admin_exists(err) => "An administrator already exists".to_owned(),
        Some(400) => err.server_message().unwrap_or("Invalid request parameters").to_owned(),
        Some(401) => "Authentication failed, check your username and password".to_owned(),
        Some(403) => "Permission denied".to_owned(),
        Some(404) => "The requested resource does not exist".to_owned(),
        Some(500) => "Internal server error, please retry later".to_owned(),
        Some(502) => "Gateway error, check the network connection".to_owned(),
        Some(503) => "Service temporarily unavailable, please retry later".to_owned(),
        _ => err.server_message().map_or_else(|| "Network error, check the connection".to_owned(), str::to_owned),
    }
}

fn init_admin_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(400) if is_admin_exists(err) => "An administrator already exists".to_owned(),
        Some(400) => err.server_message().unwrap_or("Invalid request parameters").to_owned(),
        Some(409) => "Initialization already in progress, do not resubmit".to_owned(),
        Some(500) => "Server error, administrator was not created".to_owned(),
        _ => err
            .server_message()
            .map_or_else(|| "Failed to create administrator, please retry later".to_owned(), str::to_owned),
    }
}

fn system_status_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(404) => "System status endpoint not found, check the backend service".to_owned(),
        Some(500) => "System status check failed: internal server error".to_owned(),
        Some(status) => format!("System status check failed (status {status})"),
        None => "Cannot reach the server, check the network connection".to_owned(),
    }
}

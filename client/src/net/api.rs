//! Auth and bootstrap endpoints.
//!
//! Every function goes through [`ApiClient`], so failures are already
//! toasted (and a 401 has already cleared the session) when they return.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::request::{ApiClient, ApiRequest, FetchPolicy, Method};
use super::types::{
    CreatedUser, FirstAdminCreateRequest, LoginRequest, LoginResponse, RegisterRequest, SystemStatus, UserInfo,
};

pub const SYSTEM_STATUS_PATH: &str = "/auth/system-status";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const INIT_ADMIN_PATH: &str = "/auth/init-admin";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const ME_PATH: &str = "/auth/me";

/// The system-status probe request. Never served from any cache.
pub fn system_status_request() -> ApiRequest {
    ApiRequest::new(Method::Get, SYSTEM_STATUS_PATH).policy(FetchPolicy::Always)
}

/// `GET /auth/system-status`.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn system_status(api: ApiClient) -> Result<SystemStatus, ApiError> {
    api.send(system_status_request()).await
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn login(api: ApiClient, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    api.post(LOGIN_PATH, req).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn register(api: ApiClient, req: &RegisterRequest) -> Result<CreatedUser, ApiError> {
    api.post(REGISTER_PATH, req).await
}

/// `POST /auth/init-admin`. Only accepted while the system is uninitialized.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn init_admin(api: ApiClient, req: &FirstAdminCreateRequest) -> Result<CreatedUser, ApiError> {
    api.post(INIT_ADMIN_PATH, req).await
}

/// `POST /auth/logout`. Best effort; the caller clears the session either way.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn logout(api: ApiClient) -> Result<(), ApiError> {
    api.send(ApiRequest::new(Method::Post, LOGOUT_PATH)).await
}

/// `GET /auth/me`.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn me(api: ApiClient) -> Result<UserInfo, ApiError> {
    api.get::<CreatedUser>(ME_PATH, Vec::new()).await.map(UserInfo::from)
}

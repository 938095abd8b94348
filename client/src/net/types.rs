//! Shared wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! Every backend response is wrapped in an [`ApiResponse`] envelope whose
//! `code` is `200` on success. Field names are camelCase on the wire; the
//! structs keep Rust naming and let serde do the mapping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Envelope `code` signalling success.
pub const SUCCESS_CODE: i64 = 200;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Response envelope wrapping every REST payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    /// Field-level errors keyed by field name, used by form validation.
    #[serde(default)]
    pub errors: Option<BTreeMap<String, serde_json::Value>>,
}

/// Result of `GET /auth/system-status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    /// `true` until the first administrator account has been created.
    pub first_deployment: bool,
}

/// Account role as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    #[default]
    Member,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Admin, UserRole::Member];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Identity of the signed-in user, persisted alongside the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// Remaining token lifetime in seconds.
    pub expires_in: i64,
    pub expires_at: String,
    pub user_id: i64,
    pub username: String,
    pub role: UserRole,
    pub login_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/init-admin`. The username is fixed server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstAdminCreateRequest {
    pub password: String,
    pub confirm_password: String,
}

/// A created or fetched account (`register`, `init-admin`, `me`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
}

impl From<CreatedUser> for UserInfo {
    fn from(user: CreatedUser) -> Self {
        Self { id: user.id, username: user.username, role: user.role }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Resource-specific list filters, rendered as extra query parameters.
pub trait PageFilter: Clone + Default + PartialEq {
    /// `(name, value)` pairs; `None` values are left off the query string.
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)>;
}

impl PageFilter for () {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        Vec::new()
    }
}

/// Query for `GET /{resource}/page`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageRequest<F> {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub filter: F,
}

impl<F: PageFilter> PageRequest<F> {
    /// Apply defaults and bounds: page >= 1, size in `1..=100`, and only
    /// `[A-Za-z0-9_]` sort fields.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let size = match self.size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        let sort_field = self
            .sort_field
            .clone()
            .filter(|f| !f.is_empty() && f.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        let sort_order = sort_field.as_ref().and(self.sort_order);
        Self { page: Some(page), size: Some(size), sort_field, sort_order, filter: self.filter.clone() }
    }

    /// Full query-string pairs for the normalized request.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        let n = self.normalized();
        let mut pairs = vec![
            ("page", n.page.map(|p| p.to_string())),
            ("size", n.size.map(|s| s.to_string())),
            ("sortField", n.sort_field.clone()),
            ("sortOrder", n.sort_order.map(|o| o.as_str().to_owned())),
        ];
        pairs.extend(n.filter.query_pairs());
        pairs
    }
}

/// One page of results from `GET /{resource}/page`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> PageResponse<T> {
    /// Number of pages needed for `total` rows; at least one.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        let size = u64::from(self.size.max(1));
        self.total.div_ceil(size).max(1)
    }
}

//! HTTP request layer shared by every REST call.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! [`REQUEST_TIMEOUT_MS`] timer. Server-side (SSR) and native tests: every
//! dispatch resolves to [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned to the caller *and* surfaced as an error toast.
//! A 401 (HTTP status or envelope code) additionally clears the session, so
//! the next route-guard evaluation finds no token and redirects to login.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{ApiResponse, SUCCESS_CODE};
use crate::state::notifications::Notifications;
use crate::state::session::SessionStore;

/// REST base URL, overridable at build time.
pub const API_BASE: &str = match option_env!("OILTEST_API_BASE_URL") {
    Some(base) => base,
    None => "/api",
};

pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Query-string pairs; `None` values are omitted.
pub type Query = Vec<(&'static str, Option<String>)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Cache behavior for a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Let the browser apply its normal HTTP caching.
    #[default]
    Default,
    /// Bypass every cache layer and always hit the network.
    Always,
}

/// A fully described REST call, independent of the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Query,
    pub body: Option<serde_json::Value>,
    pub policy: FetchPolicy,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, policy: FetchPolicy::Default }
    }

    #[must_use]
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }

    #[must_use]
    pub fn policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Join a base URL and an endpoint path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Keep only the query pairs that carry a non-empty value.
pub fn present_pairs(query: &Query) -> Vec<(&'static str, String)> {
    query
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| (*k, v.trim().to_owned())))
        .filter(|(_, v)| !v.is_empty())
        .collect()
}

/// Percent-encode a value used as a single path segment.
pub fn encode_segment(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::encode_uri_component(raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turn an HTTP status and raw body into the envelope's `data`.
///
/// # Errors
///
/// `Http` for non-2xx statuses, `Rejected` when the envelope code is not 200,
/// and `Decode` when the body is not a valid envelope for `T`.
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_text(status).to_owned());
        return Err(ApiError::Http { status, message });
    }

    let envelope: ApiResponse<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.code != SUCCESS_CODE {
        let message = if envelope.message.trim().is_empty() { "Request Error".to_owned() } else { envelope.message };
        return Err(ApiError::Rejected { code: envelope.code, message });
    }
    serde_json::from_value(envelope.data.unwrap_or(serde_json::Value::Null)).map_err(|e| ApiError::Decode(e.to_string()))
}

fn status_text(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not found",
        409 => "Conflict",
        500 => "Internal server error",
        502 => "Bad gateway",
        503 => "Service unavailable",
        504 => "Gateway timeout",
        _ => "Request Error",
    }
}

/// REST client bound to the session and notification contexts.
#[derive(Clone, Copy, Debug)]
pub struct ApiClient {
    base: &'static str,
    session: SessionStore,
    notices: Notifications,
}

impl ApiClient {
    pub fn new(session: SessionStore, notices: Notifications) -> Self {
        Self { base: API_BASE, session, notices }
    }

    /// Build from the contexts `App` provides. Call from a component body.
    pub fn from_context() -> Self {
        Self::new(expect_context::<SessionStore>(), expect_context::<Notifications>())
    }

    pub fn session(&self) -> SessionStore {
        self.session
    }

    pub fn notices(&self) -> Notifications {
        self.notices
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T, ApiError> {
        self.send(ApiRequest::new(Method::Get, path).query(query)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let req = self.prepare(ApiRequest::new(Method::Post, path).json(body))?;
        self.send(req).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let req = self.prepare(ApiRequest::new(Method::Put, path).json(body))?;
        self.send(req).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(ApiRequest::new(Method::Patch, path)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(ApiRequest::new(Method::Delete, path)).await
    }

    /// Dispatch a request and unwrap its envelope.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; the error has already been shown as a toast and a
    /// 401 has already logged the session out when this returns.
    pub async fn send<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, ApiError> {
        let result = self
            .dispatch(&req)
            .await
            .and_then(|(status, body)| interpret_response::<T>(status, &body));
        if let Err(err) = &result {
            self.report(&req, err);
        }
        result
    }

    fn prepare(&self, req: Result<ApiRequest, ApiError>) -> Result<ApiRequest, ApiError> {
        req.inspect_err(|err| self.notices.error(err.user_message()))
    }

    fn report(&self, req: &ApiRequest, err: &ApiError) {
        if *err == ApiError::Unavailable {
            return;
        }
        leptos::logging::warn!("{:?} {} failed: {err}", req.method, req.path);
        self.notices.error(err.user_message());
        if err.is_unauthorized() {
            leptos::logging::warn!("authorization rejected; clearing session");
            self.session.logout();
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch(&self, req: &ApiRequest) -> Result<(u16, String), ApiError> {
        use futures::future::{Either, select};
        use gloo_net::http::RequestBuilder;

        let url = join_url(self.base, &req.path);
        let mut builder = RequestBuilder::new(&url).method(req.method.into());
        let pairs = present_pairs(&req.query);
        if !pairs.is_empty() {
            builder = builder.query(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }
        if let Some(bearer) = self.session.get_untracked().bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        if req.policy == FetchPolicy::Always {
            builder = builder
                .cache(web_sys::RequestCache::NoStore)
                .header("Cache-Control", "no-cache");
        }
        let request = match &req.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let send = Box::pin(request.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
        match select(send, timeout).await {
            Either::Left((Ok(resp), _)) => {
                let status = resp.status();
                let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
                log::debug!("{:?} {url} -> {status}", req.method);
                Ok((status, body))
            }
            Either::Left((Err(e), _)) => Err(ApiError::Transport(e.to_string())),
            Either::Right(_) => Err(ApiError::Timeout),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    async fn dispatch(&self, req: &ApiRequest) -> Result<(u16, String), ApiError> {
        let _ = (self.base, req);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl From<Method> for gloo_net::http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

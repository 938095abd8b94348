//! Same-origin forwarding of `/api/*` to the REST backend.
//!
//! DESIGN
//! ======
//! Requests are buffered and replayed against `{backend}/{rest}` with the
//! original method, query string, and end-to-end headers (including
//! `Authorization`). Backend responses, error statuses included, are passed
//! back unchanged; only transport failures become [`ProxyError`].

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, header};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Largest request body forwarded to the backend.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const API_PREFIX: &str = "/api";

/// Connection-scoped headers plus the ones rebuilt for the new hop.
fn is_hop_header(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    ) || *name == header::HOST
        || *name == header::CONTENT_LENGTH
}

/// Copy of `headers` without hop-by-hop entries.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_header(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Backend URL for an incoming `/api/...` path and optional query string.
pub fn upstream_url(backend: &str, path: &str, query: Option<&str>) -> String {
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path).trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{backend}/{rest}?{q}"),
        None => format!("{backend}/{rest}"),
    }
}

/// Forward one request and relay the backend response.
///
/// # Errors
///
/// [`ProxyError`] when the body cannot be read or the backend cannot be
/// reached in time.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, req.uri().path(), req.uri().query());
    let (parts, body) = req.into_parts();
    let body: Bytes =
        axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| ProxyError::RequestBody(e.to_string()))?;

    tracing::debug!(method = %parts.method, upstream = %url, "forwarding api request");
    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(forwarded_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwarded_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(upstream = %url, status = status.as_u16(), "backend error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

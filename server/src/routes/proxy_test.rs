use axum::http::HeaderValue;

use super::*;

#[test]
fn upstream_url_strips_api_prefix() {
    assert_eq!(upstream_url("http://b/api", "/api/auth/system-status", None), "http://b/api/auth/system-status");
    assert_eq!(upstream_url("http://b", "/api/projects/page", Some("page=2&size=10")), "http://b/projects/page?page=2&size=10");
}

#[test]
fn upstream_url_drops_empty_query() {
    assert_eq!(upstream_url("http://b", "/api/users", Some("")), "http://b/users");
}

#[test]
fn upstream_url_keeps_encoded_segments() {
    assert_eq!(
        upstream_url("http://b", "/api/projects/by-project-no/P%2F01", None),
        "http://b/projects/by-project-no/P%2F01"
    );
}

#[test]
fn forwarded_headers_drop_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));

    let kept = forwarded_headers(&headers);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[header::AUTHORIZATION], "Bearer t");
    assert!(kept.contains_key(header::CONTENT_TYPE));
}

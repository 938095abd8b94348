use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

fn unreachable_backend() -> AppState {
    let config = ServerConfig {
        port: 0,
        // Port 9 (discard) is closed on test machines, so connects fail fast.
        backend_url: "http://127.0.0.1:9/api".into(),
        proxy_timeout_secs: 2,
    };
    AppState::new(&config).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let res = api_routes(unreachable_backend())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn unreachable_backend_yields_bad_gateway_envelope() {
    let res = api_routes(unreachable_backend())
        .oneshot(Request::get("/api/auth/system-status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], 502);
    assert!(json["message"].as_str().unwrap().starts_with("backend unavailable"));
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn proxy_accepts_every_method() {
    let req = Request::delete("/api/projects/3").body(Body::empty()).unwrap();
    let res = api_routes(unreachable_backend()).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unknown_non_api_path_is_not_proxied() {
    let res = api_routes(unreachable_backend())
        .oneshot(Request::get("/projects").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

use super::*;

#[test]
fn statuses_map_to_gateway_codes() {
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::RequestBody("too large".into()).status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn timeout_response_uses_envelope_shape() {
    let res = ProxyError::Timeout.into_response();
    assert_eq!(res.status(), StatusCode::GATEWAY_TIMEOUT);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "code": 504, "message": "backend timed out", "data": null, "errors": null }));
}

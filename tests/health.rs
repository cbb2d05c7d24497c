mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use habstick_storefront::{
    REQUEST_ID_HEADER, routes::health::health_check, service, storage::MemoryStorage,
};
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn served_app_assigns_request_id() {
    let app = service(common::state_with(Arc::new(MemoryStorage::new())));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let assigned = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("request id header");
    assert_eq!(assigned.len(), 36);

    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "client-supplied-7")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "client-supplied-7"
    );
}

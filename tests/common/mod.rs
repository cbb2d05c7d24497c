#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use habstick_storefront::{
    app,
    catalog::StaticCatalog,
    checkout::Pricing,
    config::AppConfig,
    middleware::auth::Claims,
    state::AppState,
    storage::LocalStorage,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";

pub fn config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cart_storage_dir: PathBuf::from("unused"),
        jwt_secret: Some(SECRET.into()),
        razorpay_key_id: "rzp_test_key".into(),
        pricing: Pricing::default(),
    }
}

pub fn state_with(storage: Arc<dyn LocalStorage>) -> AppState {
    AppState::new(storage, Arc::new(StaticCatalog::habstick()), &config())
}

pub fn token() -> String {
    let claims = Claims {
        sub: "user-1".into(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        name: Some("Asha".into()),
        email: Some("asha@example.com".into()),
        phone_number: None,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode token")
}

pub async fn call(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub fn router(state: AppState) -> Router {
    app(state)
}

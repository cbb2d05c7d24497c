mod common;

use std::sync::Arc;

use habstick_storefront::storage::MemoryStorage;
use serde_json::json;

use common::{call, router, state_with};

#[tokio::test]
async fn chat_returns_canned_answer_or_none() {
    let app = router(state_with(Arc::new(MemoryStorage::new())));

    let (_, body) = call(
        &app,
        "POST",
        "/api/assistant/chat",
        Some(json!({ "message": "Do you offer support?" })),
        None,
    )
    .await;
    assert!(body["data"]["reply"].as_str().unwrap().starts_with("For support"));

    let (_, body) = call(
        &app,
        "POST",
        "/api/assistant/chat",
        Some(json!({ "message": "tell me a joke" })),
        None,
    )
    .await;
    assert!(body["data"]["reply"].is_null());
    assert_eq!(body["message"], "No canned answer");
}

#[tokio::test]
async fn voice_command_maps_to_action() {
    let app = router(state_with(Arc::new(MemoryStorage::new())));
    let (_, body) = call(
        &app,
        "POST",
        "/api/assistant/voice",
        Some(json!({ "command": "Go to products" })),
        None,
    )
    .await;
    assert_eq!(body["data"]["action"], json!({ "navigate": "products" }));
    assert_eq!(body["data"]["speech"], "Navigating to products page.");
}

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use habstick_storefront::storage::MemoryStorage;
use serde_json::{Value, json};

use common::{call, router, state_with, token};

fn address() -> Value {
    json!({
        "name": "Asha",
        "street": "12 MG Road",
        "city": "Kochi",
        "state": "Kerala",
        "zip": "682001"
    })
}

async fn filled_app() -> axum::Router {
    let app = router(state_with(Arc::new(MemoryStorage::new())));
    for (id, qty) in [("habstick-pro", 1), ("habstick-mini", 2)] {
        call(
            &app,
            "POST",
            "/api/cart",
            Some(json!({ "product_id": id, "quantity": qty })),
            None,
        )
        .await;
    }
    app
}

#[tokio::test]
async fn quote_includes_shipping_and_tax() {
    let app = filled_app().await;
    let (status, body) = call(&app, "GET", "/api/checkout/quote", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["subtotal_paise"], 800_000);
    assert_eq!(body["data"]["shipping_paise"], 10_000);
    assert_eq!(body["data"]["tax_paise"], 144_000);
    assert_eq!(body["data"]["total_paise"], 954_000);
}

#[tokio::test]
async fn checkout_requires_sign_in() {
    let app = filled_app().await;
    let payload = json!({ "address": address() });

    let (status, _) = call(&app, "POST", "/api/checkout/payment", Some(payload.clone()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(
        &app,
        "POST",
        "/api/checkout/payment",
        Some(payload),
        Some("not-a-jwt"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn razorpay_payment_then_confirmation_clears_cart() {
    let app = filled_app().await;
    let token = token();

    let (status, body) = call(
        &app,
        "POST",
        "/api/checkout/payment",
        Some(json!({ "address": address() })),
        Some(token.as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let options = &body["data"]["options"];
    assert_eq!(options["amount"], 954_000);
    assert_eq!(options["currency"], "INR");
    assert_eq!(options["key"], "rzp_test_key");
    assert_eq!(options["prefill"]["email"], "asha@example.com");
    let order_id = options["order_id"].as_str().unwrap().to_string();

    let (status, body) = call(
        &app,
        "POST",
        "/api/checkout/confirm",
        Some(json!({ "payment_id": "pay_1", "order_id": order_id, "signature": "sig" })),
        Some(token.as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["method"], "razorpay");
    assert_eq!(body["data"]["total_paise"], 954_000);

    let (_, cart) = call(&app, "GET", "/api/cart", None, None).await;
    assert_eq!(cart["data"]["subtotal"], 0);

    let (_, notes) = call(&app, "GET", "/api/notifications", None, None).await;
    let last = notes["data"]["items"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["message"], format!("Order successful! Order ID: {order_id}"));
}

#[tokio::test]
async fn incomplete_address_is_rejected() {
    let app = filled_app().await;
    let mut addr = address();
    addr["city"] = json!("");

    let (status, body) = call(
        &app,
        "POST",
        "/api/checkout/cod",
        Some(json!({ "address": addr })),
        Some(token().as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("city"));

    let (_, cart) = call(&app, "GET", "/api/cart", None, None).await;
    assert_eq!(cart["data"]["subtotal"], 8000);
}

#[tokio::test]
async fn cash_on_delivery_clears_cart() {
    let app = filled_app().await;
    let (status, body) = call(
        &app,
        "POST",
        "/api/checkout/cod",
        Some(json!({ "address": address() })),
        Some(token().as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["method"], "cash_on_delivery");

    let (status, _) = call(
        &app,
        "POST",
        "/api/checkout/cod",
        Some(json!({ "address": address() })),
        Some(token().as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "empty cart cannot be ordered");
}

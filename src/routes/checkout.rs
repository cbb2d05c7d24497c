use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    checkout::{CheckoutQuote, OrderReceipt, PaymentConfirmation, ShippingAddress},
    dto::checkout::{CheckoutRequest, PaymentSession},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::checkout_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", get(quote))
        .route("/payment", post(start_payment))
        .route("/confirm", post(confirm_payment))
        .route("/cod", post(cash_on_delivery))
}

#[utoipa::path(
    get,
    path = "/api/checkout/quote",
    responses(
        (status = 200, description = "Subtotal, shipping, tax and total in paise", body = ApiResponse<CheckoutQuote>)
    ),
    tag = "Checkout"
)]
pub async fn quote(State(state): State<AppState>) -> Json<ApiResponse<CheckoutQuote>> {
    Json(checkout_service::quote(&state))
}

#[utoipa::path(
    post,
    path = "/api/checkout/payment",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Razorpay options for the current cart", body = ApiResponse<PaymentSession>),
        (status = 400, description = "Empty cart or incomplete address"),
        (status = 401, description = "Not signed in"),
    ),
    security(("bearer_auth" = [])),
    tag = "Checkout"
)]
pub async fn start_payment(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<PaymentSession>>> {
    Ok(Json(checkout_service::start_payment(&state, &user, payload)?))
}

#[utoipa::path(
    post,
    path = "/api/checkout/confirm",
    request_body = PaymentConfirmation,
    responses(
        (status = 200, description = "Payment recorded and cart cleared", body = ApiResponse<OrderReceipt>),
        (status = 400, description = "Empty cart or incomplete confirmation"),
        (status = 401, description = "Not signed in"),
    ),
    security(("bearer_auth" = [])),
    tag = "Checkout"
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<PaymentConfirmation>,
) -> AppResult<Json<ApiResponse<OrderReceipt>>> {
    Ok(Json(checkout_service::confirm_payment(&state, &user, payload)?))
}

#[utoipa::path(
    post,
    path = "/api/checkout/cod",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Cash-on-delivery order placed and cart cleared", body = ApiResponse<OrderReceipt>),
        (status = 400, description = "Empty cart or incomplete address"),
        (status = 401, description = "Not signed in"),
    ),
    security(("bearer_auth" = [])),
    tag = "Checkout"
)]
pub async fn cash_on_delivery(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<OrderReceipt>>> {
    let address: ShippingAddress = payload.address;
    Ok(Json(checkout_service::place_cash_on_delivery(
        &state, &user, address,
    )?))
}

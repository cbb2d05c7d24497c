use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart).delete(clear_cart))
        .route("/{product_id}", put(update_quantity).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines in display order", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn cart_list(State(state): State<AppState>) -> Json<ApiResponse<CartView>> {
    Json(cart_service::view_cart(&state))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add a product or increase its quantity", body = ApiResponse<CartView>),
        (status = 400, description = "Unknown product or zero quantity"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::add_to_cart(&state, payload)?))
}

#[utoipa::path(
    put,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Catalog id")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity set; zero or less removes the line", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> Json<ApiResponse<CartView>> {
    Json(cart_service::update_quantity(&state, &product_id, payload))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Catalog id")
    ),
    responses(
        (status = 200, description = "Line removed (no-op if absent)", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Json<ApiResponse<CartView>> {
    Json(cart_service::remove_from_cart(&state, &product_id))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> Json<ApiResponse<CartView>> {
    Json(cart_service::clear_cart(&state))
}

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{CatalogItem, Category},
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    pub category: Option<Category>,
}

#[derive(Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<CatalogItem>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<ProductList>> {
    let items: Vec<CatalogItem> = match query.category {
        Some(category) => state.catalog.by_category(category).into_iter().cloned().collect(),
        None => state.catalog.all().to_vec(),
    };
    let meta = Meta::total(items.len());
    Json(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Catalog id")
    ),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<CatalogItem>),
        (status = 404, description = "Unknown product")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<CatalogItem>>> {
    let item = state.catalog.find(&id).cloned().ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("OK", item, None)))
}

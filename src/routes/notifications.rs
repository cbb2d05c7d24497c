use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    notifications::Notification,
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Serialize, ToSchema)]
pub struct NotificationList {
    pub items: Vec<Notification>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/{id}", delete(dismiss_notification))
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Unexpired notifications, oldest first", body = ApiResponse<NotificationList>)
    ),
    tag = "Notifications"
)]
pub async fn list_notifications(State(state): State<AppState>) -> Json<ApiResponse<NotificationList>> {
    let now = Utc::now();
    state.notifications.prune(now);
    let items = state.notifications.active(now);
    let meta = Meta::total(items.len());
    Json(ApiResponse::success("OK", NotificationList { items }, Some(meta)))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Dismissed", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Unknown or expired notification")
    ),
    tag = "Notifications"
)]
pub async fn dismiss_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if !state.notifications.dismiss(id) {
        return Err(AppError::NotFound);
    }
    Ok(Json(ApiResponse::success(
        "Dismissed",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}

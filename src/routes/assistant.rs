use axum::{Json, Router, extract::State, routing::post};

use crate::{
    assistant::{VoiceReply, chat_reply, interpret_voice},
    dto::assistant::{ChatReply, ChatRequest, VoiceRequest},
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/voice", post(voice))
}

#[utoipa::path(
    post,
    path = "/api/assistant/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Canned answer, if one matches", body = ApiResponse<ChatReply>)
    ),
    tag = "Assistant"
)]
pub async fn chat(Json(payload): Json<ChatRequest>) -> Json<ApiResponse<ChatReply>> {
    let reply = chat_reply(&payload.message).map(str::to_string);
    let message = if reply.is_some() { "OK" } else { "No canned answer" };
    Json(ApiResponse::success(message, ChatReply { reply }, None))
}

#[utoipa::path(
    post,
    path = "/api/assistant/voice",
    request_body = VoiceRequest,
    responses(
        (status = 200, description = "Recognized voice command", body = ApiResponse<VoiceReply>)
    ),
    tag = "Assistant"
)]
pub async fn voice(
    State(state): State<AppState>,
    Json(payload): Json<VoiceRequest>,
) -> Json<ApiResponse<Option<VoiceReply>>> {
    let reply = interpret_voice(&payload.command, state.catalog.as_ref());
    if reply.is_none() {
        tracing::debug!(command = %payload.command, "unrecognized voice command");
    }
    let message = if reply.is_some() { "OK" } else { "Command not recognized" };
    Json(ApiResponse::success(message, reply, None))
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatReply {
    /// `None` when no canned answer matches.
    pub reply: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoiceRequest {
    pub command: String,
}

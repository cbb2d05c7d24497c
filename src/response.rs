use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub total: Option<i64>,
    pub item_count: Option<i64>,
}

impl Meta {
    pub fn new(total: i64, item_count: i64) -> Self {
        Self {
            total: Some(total),
            item_count: Some(item_count),
        }
    }

    pub fn total(total: usize) -> Self {
        Self {
            total: Some(total as i64),
            item_count: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            total: None,
            item_count: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{cart::CartStore, models::CartLineItem};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: u32,
    pub variant: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Zero or less removes the line.
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    pub subtotal: i64,
    pub item_count: u64,
}

impl From<&CartStore> for CartView {
    fn from(store: &CartStore) -> Self {
        Self {
            items: store.line_items().to_vec(),
            subtotal: store.subtotal(),
            item_count: store.item_count(),
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Premium,
    Standard,
}

/// A purchasable product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in whole rupees.
    pub price: i64,
    pub features: Vec<String>,
    pub image_url: String,
    pub category: Option<Category>,
}

/// One row of the cart, keyed by catalog id.
///
/// `name`, `price`, `image` and `variant` are captured when the line is first
/// added and are not re-synced from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(default, alias = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl CartLineItem {
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}

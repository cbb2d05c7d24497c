//! Order quoting and the hand-off to the payment gateway.
//!
//! Amounts leaving this module are in paise, the unit Razorpay expects.
//! The cart is only cleared once the gateway reports a successful payment
//! (or a cash-on-delivery order is placed).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{cart::CartStore, models::CartLineItem};

pub const CURRENCY: &str = "INR";
pub const MERCHANT_NAME: &str = "HabStick";
pub const THEME_COLOR: &str = "#3b82f6";

const PAISE_PER_RUPEE: i64 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("missing shipping fields: {}", .0.join(", "))]
    InvalidAddress(Vec<&'static str>),

    #[error("invalid payment confirmation: {0}")]
    InvalidConfirmation(&'static str),
}

/// Flat shipping plus a percentage tax on the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    /// Whole rupees, charged once per non-empty order.
    pub shipping_cost: i64,
    pub tax_rate_percent: i64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            shipping_cost: 100,
            tax_rate_percent: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CheckoutQuote {
    pub items: Vec<CartLineItem>,
    pub item_count: u64,
    pub subtotal_paise: i64,
    pub shipping_paise: i64,
    pub tax_paise: i64,
    pub total_paise: i64,
}

impl CheckoutQuote {
    pub fn from_cart(store: &CartStore, pricing: &Pricing) -> Self {
        let subtotal = store.subtotal();
        let subtotal_paise = subtotal.saturating_mul(PAISE_PER_RUPEE);
        let shipping_paise = if store.is_empty() {
            0
        } else {
            pricing.shipping_cost.saturating_mul(PAISE_PER_RUPEE)
        };
        // rupees * 100 * rate / 100
        let tax_paise = subtotal.saturating_mul(pricing.tax_rate_percent);

        Self {
            items: store.line_items().to_vec(),
            item_count: store.item_count(),
            subtotal_paise,
            shipping_paise,
            tax_paise,
            total_paise: subtotal_paise
                .saturating_add(shipping_paise)
                .saturating_add(tax_paise),
        }
    }
}

fn default_country() -> String {
    "India".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default = "default_country")]
    pub country: String,
}

impl ShippingAddress {
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::InvalidAddress(missing))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Prefill {
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Theme {
    pub color: String,
}

/// Options handed to the Razorpay checkout widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaymentOptions {
    pub key: String,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct PaymentConfirmation {
    pub payment_id: String,
    pub order_id: String,
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Razorpay,
    CashOnDelivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderReceipt {
    pub order_id: String,
    pub payment_id: Option<String>,
    pub method: PaymentMethod,
    pub total_paise: i64,
    pub items: Vec<CartLineItem>,
    pub placed_at: DateTime<Utc>,
}

pub fn new_order_id() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("order_{}", &raw[..14])
}

/// Build the gateway request for the current cart.
pub fn prepare_payment(
    store: &CartStore,
    pricing: &Pricing,
    key_id: &str,
    address: &ShippingAddress,
    prefill: Prefill,
) -> Result<(CheckoutQuote, PaymentOptions), CheckoutError> {
    if store.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    address.validate()?;

    let quote = CheckoutQuote::from_cart(store, pricing);
    let options = PaymentOptions {
        key: key_id.to_string(),
        amount: quote.total_paise,
        currency: CURRENCY.to_string(),
        name: MERCHANT_NAME.to_string(),
        description: format!("Order with {} item(s)", store.len()),
        order_id: new_order_id(),
        prefill,
        theme: Theme {
            color: THEME_COLOR.to_string(),
        },
    };
    tracing::info!(order_id = %options.order_id, amount = options.amount, "payment prepared");
    Ok((quote, options))
}

/// Record a successful gateway callback and empty the cart.
pub fn confirm_payment(
    store: &mut CartStore,
    pricing: &Pricing,
    confirmation: &PaymentConfirmation,
) -> Result<OrderReceipt, CheckoutError> {
    if confirmation.payment_id.trim().is_empty() {
        return Err(CheckoutError::InvalidConfirmation("payment_id is required"));
    }
    if confirmation.order_id.trim().is_empty() {
        return Err(CheckoutError::InvalidConfirmation("order_id is required"));
    }
    if store.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let quote = CheckoutQuote::from_cart(store, pricing);
    store.clear_cart();
    tracing::info!(
        order_id = %confirmation.order_id,
        payment_id = %confirmation.payment_id,
        "payment confirmed"
    );

    Ok(OrderReceipt {
        order_id: confirmation.order_id.clone(),
        payment_id: Some(confirmation.payment_id.clone()),
        method: PaymentMethod::Razorpay,
        total_paise: quote.total_paise,
        items: quote.items,
        placed_at: Utc::now(),
    })
}

pub fn place_cash_on_delivery(
    store: &mut CartStore,
    pricing: &Pricing,
    address: &ShippingAddress,
) -> Result<OrderReceipt, CheckoutError> {
    if store.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    address.validate()?;

    let quote = CheckoutQuote::from_cart(store, pricing);
    store.clear_cart();
    let order_id = new_order_id();
    tracing::info!(%order_id, "cash on delivery order placed");

    Ok(OrderReceipt {
        order_id,
        payment_id: None,
        method: PaymentMethod::CashOnDelivery,
        total_paise: quote.total_paise,
        items: quote.items,
        placed_at: Utc::now(),
    })
}

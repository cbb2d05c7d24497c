use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::checkout::{CheckoutQuote, PaymentOptions, ShippingAddress};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub address: ShippingAddress,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentSession {
    pub quote: CheckoutQuote,
    pub options: PaymentOptions,
}

use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    assistant::{Page, VoiceAction, VoiceReply},
    checkout::{
        CheckoutQuote, OrderReceipt, PaymentConfirmation, PaymentMethod, PaymentOptions, Prefill,
        ShippingAddress, Theme,
    },
    dto::{
        assistant::{ChatReply, ChatRequest, VoiceRequest},
        cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
        checkout::{CheckoutRequest, PaymentSession},
    },
    models::{CartLineItem, CatalogItem, Category},
    notifications::{Notification, NotificationKind},
    response::{ApiResponse, Meta},
    routes::{assistant, cart, checkout, health, notifications, products},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        notifications::list_notifications,
        notifications::dismiss_notification,
        checkout::quote,
        checkout::start_payment,
        checkout::confirm_payment,
        checkout::cash_on_delivery,
        assistant::chat,
        assistant::voice
    ),
    components(
        schemas(
            CatalogItem,
            Category,
            CartLineItem,
            CartView,
            AddToCartRequest,
            UpdateQuantityRequest,
            Notification,
            NotificationKind,
            notifications::NotificationList,
            CheckoutQuote,
            CheckoutRequest,
            ShippingAddress,
            Prefill,
            Theme,
            PaymentOptions,
            PaymentSession,
            PaymentConfirmation,
            PaymentMethod,
            OrderReceipt,
            ChatRequest,
            ChatReply,
            VoiceRequest,
            VoiceReply,
            VoiceAction,
            Page,
            products::ProductList,
            products::ProductQuery,
            Meta,
            ApiResponse<CatalogItem>,
            ApiResponse<products::ProductList>,
            ApiResponse<CartView>,
            ApiResponse<CheckoutQuote>,
            ApiResponse<OrderReceipt>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Notifications", description = "Transient user messages"),
        (name = "Checkout", description = "Quote and payment hand-off"),
        (name = "Assistant", description = "Chat and voice helpers"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

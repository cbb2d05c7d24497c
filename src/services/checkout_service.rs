use crate::{
    checkout::{
        self, CheckoutQuote, OrderReceipt, PaymentConfirmation, ShippingAddress,
    },
    dto::checkout::{CheckoutRequest, PaymentSession},
    error::AppResult,
    middleware::auth::AuthUser,
    notifications::NotificationKind,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn quote(state: &AppState) -> ApiResponse<CheckoutQuote> {
    let quote = CheckoutQuote::from_cart(&state.cart.lock(), &state.pricing);
    ApiResponse::success("OK", quote, Some(Meta::empty()))
}

pub fn start_payment(
    state: &AppState,
    user: &AuthUser,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<PaymentSession>> {
    let (quote, options) = checkout::prepare_payment(
        &state.cart.lock(),
        &state.pricing,
        &state.razorpay_key_id,
        &payload.address,
        user.prefill(),
    )?;
    tracing::info!(user_id = %user.user_id, order_id = %options.order_id, "checkout started");
    Ok(ApiResponse::success(
        "Payment prepared",
        PaymentSession { quote, options },
        None,
    ))
}

pub fn confirm_payment(
    state: &AppState,
    user: &AuthUser,
    payload: PaymentConfirmation,
) -> AppResult<ApiResponse<OrderReceipt>> {
    let result = checkout::confirm_payment(&mut state.cart.lock(), &state.pricing, &payload);
    let receipt = match result {
        Ok(receipt) => receipt,
        Err(err) => {
            state.notifications.notify(
                "Payment failed. Please try again.",
                NotificationKind::Error,
                None,
            );
            return Err(err.into());
        }
    };
    tracing::info!(user_id = %user.user_id, order_id = %receipt.order_id, "order completed");
    state.notifications.notify(
        format!("Order successful! Order ID: {}", receipt.order_id),
        NotificationKind::Success,
        None,
    );
    Ok(ApiResponse::success("Order successful", receipt, None))
}

pub fn place_cash_on_delivery(
    state: &AppState,
    user: &AuthUser,
    address: ShippingAddress,
) -> AppResult<ApiResponse<OrderReceipt>> {
    let receipt =
        checkout::place_cash_on_delivery(&mut state.cart.lock(), &state.pricing, &address)?;
    tracing::info!(user_id = %user.user_id, order_id = %receipt.order_id, "cash on delivery order");
    state.notifications.notify(
        "Order placed successfully! You will pay on delivery.",
        NotificationKind::Success,
        None,
    );
    Ok(ApiResponse::success("Order placed", receipt, None))
}

use crate::{
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
};

fn cart_meta(view: &CartView) -> Meta {
    Meta::new(view.subtotal, i64::try_from(view.item_count).unwrap_or(i64::MAX))
}

pub fn view_cart(state: &AppState) -> ApiResponse<CartView> {
    let view = CartView::from(&*state.cart.lock());
    let meta = cart_meta(&view);
    ApiResponse::success("OK", view, Some(meta))
}

pub fn add_to_cart(state: &AppState, payload: AddToCartRequest) -> AppResult<ApiResponse<CartView>> {
    if payload.quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    let item = state
        .catalog
        .find(&payload.product_id)
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;

    let view = {
        let mut cart = state.cart.lock();
        cart.add_to_cart(item, payload.quantity, payload.variant);
        CartView::from(&*cart)
    };
    let meta = cart_meta(&view);
    Ok(ApiResponse::success("Added to cart", view, Some(meta)))
}

pub fn update_quantity(
    state: &AppState,
    product_id: &str,
    payload: UpdateQuantityRequest,
) -> ApiResponse<CartView> {
    let view = {
        let mut cart = state.cart.lock();
        cart.update_quantity(product_id, payload.quantity);
        CartView::from(&*cart)
    };
    let meta = cart_meta(&view);
    ApiResponse::success("OK", view, Some(meta))
}

pub fn remove_from_cart(state: &AppState, product_id: &str) -> ApiResponse<CartView> {
    let view = {
        let mut cart = state.cart.lock();
        cart.remove_from_cart(product_id);
        CartView::from(&*cart)
    };
    let meta = cart_meta(&view);
    ApiResponse::success("Removed from cart", view, Some(meta))
}

pub fn clear_cart(state: &AppState) -> ApiResponse<CartView> {
    let view = {
        let mut cart = state.cart.lock();
        cart.clear_cart();
        CartView::from(&*cart)
    };
    let meta = cart_meta(&view);
    ApiResponse::success("Cart cleared", view, Some(meta))
}

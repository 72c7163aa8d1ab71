//! Get Cart Handler

use salvo::prelude::*;

use crate::{
    cart::{errors::into_status_error, models::CartResponse},
    extensions::*,
};

/// Get Cart Handler
///
/// Returns the cart with totals recomputed from current product prices.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let cart = state
        .app
        .carts
        .get_cart()
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

//! Add To Cart Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    cart::{errors::into_status_error, models::CartResponse},
    extensions::*,
    params::positive_id,
};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddToCartRequest {
    /// The product to add
    pub product_id: i64,

    /// Starting quantity for a product not yet in the cart, otherwise the
    /// change to apply; defaults to 1
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// Add To Cart Handler
///
/// Starts a line for a product new to the cart, or shifts the quantity of the
/// existing line. A line whose quantity drops to zero is removed.
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart after the change"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.add",
    skip(json, depot, res),
    fields(
        product_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();
    let product = positive_id(request.product_id, "productId")?;
    let quantity = request.quantity.unwrap_or(1);

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("quantity", quantity);

    let cart = state
        .app
        .carts
        .add_to_cart(product, quantity)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}

//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::models::{Cart, CartItem};

use crate::products::models::{ProductResponse, json_amount};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// Lines in the cart, oldest first
    pub items: Vec<CartItemResponse>,

    /// Sum of every line's quantity
    pub total_items: i64,

    /// Sum of price times quantity, rounded to cents
    pub total_price: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total_items: cart.total_items,
            total_price: json_amount(cart.total_price),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// The cart line identifier, used to remove it
    pub id: i64,

    /// The product held by the line
    pub product_id: i64,

    /// Units of the product
    pub quantity: i32,

    /// The product as it is now
    pub product: ProductResponse,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.into_i64(),
            product_id: item.product_id.into_i64(),
            quantity: item.quantity,
            product: item.product.into(),
        }
    }
}

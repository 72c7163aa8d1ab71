//! Cart Models

use rust_decimal::Decimal;

use crate::domain::{
    carts::records::{CartLineId, CartLineRecord},
    products::records::{ProductId, ProductRecord},
};

/// The cart as callers see it: live lines joined with their products, plus
/// totals recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total_items: i64,
    pub total_price: Decimal,
}

impl Cart {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: Decimal::ZERO,
        }
    }
}

/// Cart Item
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub product: ProductRecord,
}

impl CartItem {
    #[must_use]
    pub fn new(line: CartLineRecord, product: ProductRecord) -> Self {
        Self {
            id: line.id,
            product_id: line.product_id,
            quantity: line.quantity,
            product,
        }
    }
}

//! Cart totals

use rust_decimal::Decimal;

use crate::{
    domain::carts::models::{Cart, CartItem},
    pricing::{line_total, round_to_cents},
};

/// Build the cart view from joined items, summing quantities and prices.
///
/// Prices are summed exactly and rounded to cents once at the end. Returns
/// `None` when the total price does not fit in a `Decimal`.
#[must_use]
pub fn summarize(items: Vec<CartItem>) -> Option<Cart> {
    let mut total_items = 0_i64;
    let mut total_price = Decimal::ZERO;

    for item in &items {
        total_items += i64::from(item.quantity);
        total_price = total_price.checked_add(line_total(item.product.price, item.quantity)?)?;
    }

    Some(Cart {
        items,
        total_items,
        total_price: round_to_cents(total_price),
    })
}

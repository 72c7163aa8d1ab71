//! Quantity adjustments
//!
//! Deciding what a single add does to the cart is kept apart from applying it,
//! so the merge and floor rules can be checked without a store.

use crate::domain::carts::{errors::CartsServiceError, records::CartLineRecord};

/// The one store write an add resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// No line held the product; start one at `quantity`.
    Create { quantity: i32 },

    /// Keep the line with its merged quantity.
    Update { line: CartLineRecord, quantity: i32 },

    /// The merged quantity fell to zero or below.
    Delete { line: CartLineRecord },
}

/// Resolve an add of `delta` units against the line currently holding the
/// product, if any.
///
/// A first add takes `delta` as the starting quantity and it must be at least
/// one. On an existing line `delta` is added to what is there and may be
/// negative.
///
/// # Errors
///
/// Returns [`CartsServiceError::InvalidQuantity`] when a first add is not
/// positive, or when merging would overflow.
pub fn plan_adjustment(
    existing: Option<&CartLineRecord>,
    delta: i32,
) -> Result<Adjustment, CartsServiceError> {
    let Some(line) = existing else {
        if delta < 1 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        return Ok(Adjustment::Create { quantity: delta });
    };

    let quantity = line
        .quantity
        .checked_add(delta)
        .ok_or(CartsServiceError::InvalidQuantity)?;

    if quantity <= 0 {
        Ok(Adjustment::Delete { line: *line })
    } else {
        Ok(Adjustment::Update {
            line: *line,
            quantity,
        })
    }
}

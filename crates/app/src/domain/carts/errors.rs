//! Carts service errors.

use thiserror::Error;

use crate::domain::{carts::records::CartLineId, products::records::ProductId};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("Product with ID {0} not found")]
    ProductNotFound(ProductId),

    #[error("Quantity must be positive when adding a new item to cart")]
    InvalidQuantity,

    #[error("Cart item with ID {0} not found")]
    CartItemNotFound(CartLineId),

    #[error("Cart total is out of range")]
    TotalOutOfRange,

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

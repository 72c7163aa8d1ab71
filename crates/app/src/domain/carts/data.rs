//! Carts Data

use crate::domain::products::records::ProductId;

/// New Cart Line Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartLine {
    pub product_id: ProductId,
    pub quantity: i32,
}

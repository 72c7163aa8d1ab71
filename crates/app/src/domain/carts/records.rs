//! Cart Records

use crate::{domain::products::records::ProductId, ids::TypedId};

/// Cart Line ID
pub type CartLineId = TypedId<CartLineRecord>;

/// A persisted cart line. At most one exists per product and its quantity is
/// always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLineRecord {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub quantity: i32,
}

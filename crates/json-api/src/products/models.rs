//! Product Models

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::records::ProductRecord;

/// Product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: i64,

    /// Display name
    pub name: String,

    /// Unit price in whole currency units
    pub price: f64,

    /// Absolute image URL
    pub image: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into_i64(),
            name: product.name,
            price: json_amount(product.price),
            image: product.image,
        }
    }
}

/// Amounts leave the API as JSON numbers. Cent-scaled decimals are far inside
/// the range `f64` represents.
pub(crate) fn json_amount(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

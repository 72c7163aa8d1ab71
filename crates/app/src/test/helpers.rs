//! Test Helpers

use rust_decimal::Decimal;

use crate::domain::products::{
    ProductsService, ProductsServiceError, data::NewProduct, records::ProductRecord,
};

/// A valid product at `cents`.
pub(crate) fn new_product(name: &str, cents: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        image: format!(
            "https://images.example.com/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        ),
    }
}

pub(crate) async fn create_product(
    products: &dyn ProductsService,
    name: &str,
    cents: i64,
) -> Result<ProductRecord, ProductsServiceError> {
    products.create_product(new_product(name, cents)).await
}

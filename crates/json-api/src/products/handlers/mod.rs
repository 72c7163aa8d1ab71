//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront_app::domain::products::records::{ProductId, ProductRecord};

    pub(super) fn make_product(id: i64) -> ProductRecord {
        ProductRecord {
            id: ProductId::from_i64(id),
            name: "Wireless Bluetooth Headphones".to_string(),
            price: Decimal::new(5999, 2),
            image: "https://images.example.com/headphones.jpg".to_string(),
        }
    }
}

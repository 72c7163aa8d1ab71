//! Demo catalog

use rust_decimal::Decimal;

use crate::domain::products::{
    ProductsService, ProductsServiceError, data::NewProduct, records::ProductRecord,
};

/// Name, price in cents and image of every demo product.
const DEMO_PRODUCTS: [(&str, i64, &str); 8] = [
    (
        "Wireless Bluetooth Headphones",
        5999,
        "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
    ),
    (
        "Smart Watch Pro",
        19999,
        "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400",
    ),
    (
        "Running Shoes",
        8999,
        "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
    ),
    (
        "Laptop Backpack",
        4999,
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400",
    ),
    (
        "Mechanical Keyboard",
        12999,
        "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400",
    ),
    (
        "USB-C Hub Adapter",
        3499,
        "https://images.unsplash.com/photo-1625842268584-8f3296236761?w=400",
    ),
    (
        "Portable Speaker",
        4499,
        "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400",
    ),
    (
        "Gaming Mouse",
        6999,
        "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400",
    ),
];

/// The demo products, in insertion order.
#[must_use]
pub fn demo_products() -> Vec<NewProduct> {
    DEMO_PRODUCTS
        .iter()
        .map(|(name, cents, image)| NewProduct {
            name: (*name).to_string(),
            price: Decimal::new(*cents, 2),
            image: (*image).to_string(),
        })
        .collect()
}

/// Insert every demo product through the catalog.
///
/// # Errors
///
/// Stops at and returns the first failed insert; earlier inserts stay.
pub async fn seed_demo_products(
    products: &dyn ProductsService,
) -> Result<Vec<ProductRecord>, ProductsServiceError> {
    let mut seeded = Vec::with_capacity(DEMO_PRODUCTS.len());

    for product in demo_products() {
        seeded.push(products.create_product(product).await?);
    }

    Ok(seeded)
}

/// Seed the demo products only when the catalog holds nothing yet. Returns the
/// number of products inserted.
///
/// # Errors
///
/// Returns an error when listing or inserting fails.
pub async fn seed_if_empty(products: &dyn ProductsService) -> Result<usize, ProductsServiceError> {
    if !products.list_products().await?.is_empty() {
        return Ok(0);
    }

    Ok(seed_demo_products(products).await?.len())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::context::AppContext;

    use super::*;

    #[tokio::test]
    async fn seeding_inserts_every_demo_product_once() -> TestResult {
        let context = AppContext::in_memory();

        assert_eq!(seed_if_empty(context.products.as_ref()).await?, 8);
        assert_eq!(seed_if_empty(context.products.as_ref()).await?, 0);

        let listed = context.products.list_products().await?;

        assert_eq!(listed.len(), 8);
        assert_eq!(listed[0].name, "Wireless Bluetooth Headphones");
        assert_eq!(listed[1].price, Decimal::new(19999, 2));

        Ok(())
    }

    #[test]
    fn demo_products_pass_catalog_rules() {
        for product in demo_products() {
            assert!(!product.name.trim().is_empty());
            assert!(product.price >= Decimal::ZERO);
            assert!(product.image.starts_with("https://"));
        }
    }
}

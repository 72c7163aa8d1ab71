//! Storefront domain: the product catalog and the cart built on it.

pub mod carts;
pub mod products;

//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::error::ErrorKind;
use tracing::{debug, warn};

use crate::domain::{
    carts::{
        adjustment::{Adjustment, plan_adjustment},
        data::NewCartLine,
        errors::CartsServiceError,
        models::{Cart, CartItem},
        records::CartLineId,
        repository::CartLinesRepository,
        totals::summarize,
    },
    products::{
        records::{ProductId, ProductRecord},
        repository::ProductsRepository,
    },
};

/// The single global cart, read from and written to any pair of repositories.
#[derive(Clone)]
pub struct CartAggregator {
    lines: Arc<dyn CartLinesRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl CartAggregator {
    #[must_use]
    pub fn new(
        lines: Arc<dyn CartLinesRepository>,
        products: Arc<dyn ProductsRepository>,
    ) -> Self {
        Self { lines, products }
    }

    async fn load_cart(&self) -> Result<Cart, CartsServiceError> {
        let lines = self.lines.list_lines().await?;

        if lines.is_empty() {
            return Ok(Cart::empty());
        }

        let ids: Vec<ProductId> = lines.iter().map(|line| line.product_id).collect();

        let products: FxHashMap<ProductId, ProductRecord> = self
            .products
            .find_products(&ids)
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        let items = lines
            .into_iter()
            .filter_map(|line| match products.get(&line.product_id) {
                Some(product) => Some(CartItem::new(line, product.clone())),
                None => {
                    warn!(
                        line_id = %line.id,
                        product_id = %line.product_id,
                        "skipping cart line whose product no longer exists"
                    );

                    None
                }
            })
            .collect();

        summarize(items).ok_or(CartsServiceError::TotalOutOfRange)
    }
}

impl std::fmt::Debug for CartAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartAggregator").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for CartAggregator {
    async fn get_cart(&self) -> Result<Cart, CartsServiceError> {
        self.load_cart().await
    }

    async fn add_to_cart(
        &self,
        product: ProductId,
        quantity: i32,
    ) -> Result<Cart, CartsServiceError> {
        if self.products.find_product(product).await?.is_none() {
            return Err(CartsServiceError::ProductNotFound(product));
        }

        let existing = self.lines.find_line_for_product(product).await?;

        match plan_adjustment(existing.as_ref(), quantity)? {
            Adjustment::Create { quantity } => {
                let line = self
                    .lines
                    .create_line(NewCartLine {
                        product_id: product,
                        quantity,
                    })
                    .await
                    .map_err(|error| create_line_error(error, product))?;

                debug!(line_id = %line.id, product_id = %product, quantity, "created cart line");
            }
            Adjustment::Update { line, quantity } => {
                self.lines.update_quantity(line.id, quantity).await?;

                debug!(line_id = %line.id, product_id = %product, quantity, "updated cart line");
            }
            Adjustment::Delete { line } => {
                self.lines.delete_line(line.id).await?;

                debug!(line_id = %line.id, product_id = %product, "quantity reached zero, removed cart line");
            }
        }

        self.load_cart().await
    }

    async fn remove_from_cart(&self, line: CartLineId) -> Result<Cart, CartsServiceError> {
        let rows_affected = self.lines.delete_line(line).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::CartItemNotFound(line));
        }

        self.load_cart().await
    }
}

/// A product deleted between the existence check and the insert trips the
/// foreign key; report it the same way as a product that was never there.
fn create_line_error(error: sqlx::Error, product: ProductId) -> CartsServiceError {
    match error.as_database_error().map(|e| e.kind()) {
        Some(ErrorKind::ForeignKeyViolation) => CartsServiceError::ProductNotFound(product),
        _ => CartsServiceError::Sql(error),
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The cart with every live line and its totals.
    async fn get_cart(&self) -> Result<Cart, CartsServiceError>;

    /// Add `quantity` units of `product`. The first add for a product starts a
    /// line at `quantity`; later adds shift the existing quantity by it, and a
    /// result of zero or below removes the line.
    async fn add_to_cart(
        &self,
        product: ProductId,
        quantity: i32,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a line outright.
    async fn remove_from_cart(&self, line: CartLineId) -> Result<Cart, CartsServiceError>;
}

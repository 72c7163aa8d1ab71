//! In-memory store
//!
//! Holds products and cart lines behind one lock and reproduces the
//! constraints of the SQL schema, so services behave the same whichever store
//! they sit on. Nothing survives a restart.

use std::{borrow::Cow, collections::BTreeMap, error::Error as StdError};

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::{
    domain::{
        carts::{
            data::NewCartLine,
            records::{CartLineId, CartLineRecord},
            repository::CartLinesRepository,
        },
        products::{
            data::NewProduct,
            records::{ProductId, ProductRecord},
            repository::ProductsRepository,
        },
    },
    pricing::MAX_PRICE,
};

#[derive(Debug, Default)]
struct Tables {
    products: BTreeMap<ProductId, ProductRecord>,
    lines: BTreeMap<CartLineId, CartLineRecord>,
    last_product_id: i64,
    last_line_id: i64,
}

/// Product and cart tables kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every product and cart line and restart id assignment.
    pub async fn reset(&self) {
        *self.tables.write().await = Tables::default();
    }

    #[cfg(test)]
    pub(crate) async fn replace_price(&self, product: ProductId, price: Decimal) {
        if let Some(record) = self.tables.write().await.products.get_mut(&product) {
            record.price = price;
        }
    }
}

#[async_trait]
impl ProductsRepository for MemoryStore {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, sqlx::Error> {
        Ok(self.tables.read().await.products.values().cloned().collect())
    }

    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        Ok(self.tables.read().await.products.get(&product).cloned())
    }

    async fn find_products(
        &self,
        products: &[ProductId],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let tables = self.tables.read().await;

        Ok(tables
            .products
            .values()
            .filter(|record| products.contains(&record.id))
            .cloned()
            .collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, sqlx::Error> {
        if product.name.trim().is_empty() {
            return Err(violation(ErrorKind::CheckViolation, "product name is blank"));
        }

        if product.price < Decimal::ZERO {
            return Err(violation(ErrorKind::CheckViolation, "product price is negative"));
        }

        if product.price > MAX_PRICE {
            return Err(violation(
                ErrorKind::CheckViolation,
                "product price exceeds NUMERIC(10, 2)",
            ));
        }

        let mut tables = self.tables.write().await;

        tables.last_product_id += 1;

        let record = ProductRecord {
            id: ProductId::from_i64(tables.last_product_id),
            name: product.name,
            price: product.price,
            image: product.image,
        };

        tables.products.insert(record.id, record.clone());

        Ok(record)
    }

    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        let mut tables = self.tables.write().await;

        let removed = tables.products.remove(&product);

        if removed.is_some() {
            tables.lines.retain(|_, line| line.product_id != product);
        }

        Ok(removed)
    }
}

#[async_trait]
impl CartLinesRepository for MemoryStore {
    async fn list_lines(&self) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        Ok(self.tables.read().await.lines.values().copied().collect())
    }

    async fn find_line_for_product(
        &self,
        product: ProductId,
    ) -> Result<Option<CartLineRecord>, sqlx::Error> {
        Ok(self
            .tables
            .read()
            .await
            .lines
            .values()
            .find(|line| line.product_id == product)
            .copied())
    }

    async fn create_line(&self, line: NewCartLine) -> Result<CartLineRecord, sqlx::Error> {
        if line.quantity < 1 {
            return Err(violation(ErrorKind::CheckViolation, "cart quantity must be positive"));
        }

        let mut tables = self.tables.write().await;

        if !tables.products.contains_key(&line.product_id) {
            return Err(violation(
                ErrorKind::ForeignKeyViolation,
                "cart line references a missing product",
            ));
        }

        if tables
            .lines
            .values()
            .any(|existing| existing.product_id == line.product_id)
        {
            return Err(violation(
                ErrorKind::UniqueViolation,
                "product already has a cart line",
            ));
        }

        tables.last_line_id += 1;

        let record = CartLineRecord {
            id: CartLineId::from_i64(tables.last_line_id),
            product_id: line.product_id,
            quantity: line.quantity,
        };

        tables.lines.insert(record.id, record);

        Ok(record)
    }

    async fn update_quantity(
        &self,
        line: CartLineId,
        quantity: i32,
    ) -> Result<CartLineRecord, sqlx::Error> {
        if quantity < 1 {
            return Err(violation(ErrorKind::CheckViolation, "cart quantity must be positive"));
        }

        let mut tables = self.tables.write().await;

        let record = tables.lines.get_mut(&line).ok_or(sqlx::Error::RowNotFound)?;

        record.quantity = quantity;

        Ok(*record)
    }

    async fn delete_line(&self, line: CartLineId) -> Result<u64, sqlx::Error> {
        let removed = self.tables.write().await.lines.remove(&line);

        Ok(u64::from(removed.is_some()))
    }
}

/// A constraint failure shaped like the one PostgreSQL reports.
#[derive(Debug, Error)]
#[error("{message}")]
struct ConstraintViolation {
    kind: ErrorKind,
    message: &'static str,
}

impl DatabaseError for ConstraintViolation {
    fn message(&self) -> &str {
        self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        match self.kind {
            ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
            ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
            ErrorKind::NotNullViolation => ErrorKind::NotNullViolation,
            ErrorKind::CheckViolation => ErrorKind::CheckViolation,
            _ => ErrorKind::Other,
        }
    }
}

pub(crate) fn violation(kind: ErrorKind, message: &'static str) -> sqlx::Error {
    sqlx::Error::Database(Box::new(ConstraintViolation { kind, message }))
}

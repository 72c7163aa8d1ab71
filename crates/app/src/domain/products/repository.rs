//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        records::{ProductId, ProductRecord},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product.sql");
const FIND_PRODUCTS_SQL: &str = include_str!("sql/find_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Durable product rows. Every method is atomic on its own; callers get no
/// isolation across calls.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// All products, ascending by id.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, sqlx::Error>;

    /// A single product, `None` when absent.
    async fn find_product(&self, product: ProductId)
    -> Result<Option<ProductRecord>, sqlx::Error>;

    /// Every product among `products` that exists, ascending by id.
    async fn find_products(
        &self,
        products: &[ProductId],
    ) -> Result<Vec<ProductRecord>, sqlx::Error>;

    /// Insert a product and return it with its assigned id.
    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, sqlx::Error>;

    /// Delete a product, returning the removed row or `None` when absent.
    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    db: Db,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(self.db.pool())
            .await
    }

    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(FIND_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_optional(self.db.pool())
            .await
    }

    async fn find_products(
        &self,
        products: &[ProductId],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let ids: Vec<i64> = products.iter().map(|id| id.into_i64()).collect();

        query_as::<Postgres, ProductRecord>(FIND_PRODUCTS_SQL)
            .bind(ids)
            .fetch_all(self.db.pool())
            .await
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.name)
            .bind(product.price)
            .bind(product.image)
            .fetch_one(self.db.pool())
            .await
    }

    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_optional(self.db.pool())
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            image: row.try_get("image")?,
        })
    }
}

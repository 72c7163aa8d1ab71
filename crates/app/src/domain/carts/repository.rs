//! Cart Lines Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartLine,
            records::{CartLineId, CartLineRecord},
        },
        products::records::ProductId,
    },
};

const LIST_CART_LINES_SQL: &str = include_str!("sql/list_cart_lines.sql");
const FIND_CART_LINE_FOR_PRODUCT_SQL: &str = include_str!("sql/find_cart_line_for_product.sql");
const CREATE_CART_LINE_SQL: &str = include_str!("sql/create_cart_line.sql");
const UPDATE_CART_LINE_QUANTITY_SQL: &str = include_str!("sql/update_cart_line_quantity.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("sql/delete_cart_line.sql");

/// Durable cart lines for the single global cart.
#[automock]
#[async_trait]
pub trait CartLinesRepository: Send + Sync {
    /// Every live line, ascending by id.
    async fn list_lines(&self) -> Result<Vec<CartLineRecord>, sqlx::Error>;

    /// The line holding `product`, if any.
    async fn find_line_for_product(
        &self,
        product: ProductId,
    ) -> Result<Option<CartLineRecord>, sqlx::Error>;

    /// Insert a line. Fails with a unique violation when the product already
    /// has one.
    async fn create_line(&self, line: NewCartLine) -> Result<CartLineRecord, sqlx::Error>;

    /// Overwrite a line's quantity. Fails with `RowNotFound` when the line is
    /// gone.
    async fn update_quantity(
        &self,
        line: CartLineId,
        quantity: i32,
    ) -> Result<CartLineRecord, sqlx::Error>;

    /// Delete a line, returning the number of rows removed.
    async fn delete_line(&self, line: CartLineId) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgCartLinesRepository {
    db: Db,
}

impl PgCartLinesRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartLinesRepository for PgCartLinesRepository {
    async fn list_lines(&self) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(LIST_CART_LINES_SQL)
            .fetch_all(self.db.pool())
            .await
    }

    async fn find_line_for_product(
        &self,
        product: ProductId,
    ) -> Result<Option<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(FIND_CART_LINE_FOR_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_optional(self.db.pool())
            .await
    }

    async fn create_line(&self, line: NewCartLine) -> Result<CartLineRecord, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(CREATE_CART_LINE_SQL)
            .bind(line.product_id.into_i64())
            .bind(line.quantity)
            .fetch_one(self.db.pool())
            .await
    }

    async fn update_quantity(
        &self,
        line: CartLineId,
        quantity: i32,
    ) -> Result<CartLineRecord, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(UPDATE_CART_LINE_QUANTITY_SQL)
            .bind(line.into_i64())
            .bind(quantity)
            .fetch_one(self.db.pool())
            .await
    }

    async fn delete_line(&self, line: CartLineId) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_CART_LINE_SQL)
            .bind(line.into_i64())
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected())
    }
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CartLineId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            quantity: row.try_get("quantity")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlx::error::ErrorKind;
    use testresult::TestResult;

    use crate::{
        domain::products::{
            data::NewProduct,
            records::ProductRecord,
            repository::{PgProductsRepository, ProductsRepository},
        },
        test::TestDb,
    };

    use super::*;

    struct Fixture {
        _db: TestDb,
        lines: PgCartLinesRepository,
        products: PgProductsRepository,
    }

    async fn fixture() -> Fixture {
        let db = TestDb::new().await;
        let handle = Db::new(db.pool().clone());

        Fixture {
            lines: PgCartLinesRepository::new(handle.clone()),
            products: PgProductsRepository::new(handle),
            _db: db,
        }
    }

    async fn speaker(products: &PgProductsRepository) -> Result<ProductRecord, sqlx::Error> {
        products
            .create_product(NewProduct {
                name: "Portable Speaker".to_string(),
                price: Decimal::new(4499, 2),
                image: "https://images.example.com/speaker.jpg".to_string(),
            })
            .await
    }

    fn kind(error: &sqlx::Error) -> Option<ErrorKind> {
        error.as_database_error().map(|e| e.kind())
    }

    #[tokio::test]
    async fn create_find_update_and_delete_a_line() -> TestResult {
        let fixture = fixture().await;
        let product = speaker(&fixture.products).await?;

        let created = fixture
            .lines
            .create_line(NewCartLine {
                product_id: product.id,
                quantity: 2,
            })
            .await?;

        assert_eq!(
            fixture.lines.find_line_for_product(product.id).await?,
            Some(created)
        );

        let updated = fixture.lines.update_quantity(created.id, 5).await?;
        assert_eq!(updated.quantity, 5);
        assert_eq!(fixture.lines.list_lines().await?, vec![updated]);

        assert_eq!(fixture.lines.delete_line(created.id).await?, 1);
        assert_eq!(fixture.lines.delete_line(created.id).await?, 0);
        assert!(fixture.lines.list_lines().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn second_line_for_same_product_is_a_unique_violation() -> TestResult {
        let fixture = fixture().await;
        let product = speaker(&fixture.products).await?;
        let line = NewCartLine {
            product_id: product.id,
            quantity: 1,
        };

        fixture.lines.create_line(line).await?;

        let error = fixture
            .lines
            .create_line(line)
            .await
            .err()
            .ok_or("expected the second insert to fail")?;

        assert!(matches!(kind(&error), Some(ErrorKind::UniqueViolation)), "got {error:?}");

        Ok(())
    }

    #[tokio::test]
    async fn line_for_unknown_product_is_a_foreign_key_violation() -> TestResult {
        let fixture = fixture().await;

        let error = fixture
            .lines
            .create_line(NewCartLine {
                product_id: ProductId::from_i64(42),
                quantity: 1,
            })
            .await
            .err()
            .ok_or("expected the insert to fail")?;

        assert!(matches!(kind(&error), Some(ErrorKind::ForeignKeyViolation)), "got {error:?}");

        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_product_cascades_to_its_line() -> TestResult {
        let fixture = fixture().await;
        let product = speaker(&fixture.products).await?;

        fixture
            .lines
            .create_line(NewCartLine {
                product_id: product.id,
                quantity: 3,
            })
            .await?;

        fixture.products.delete_product(product.id).await?;

        assert!(fixture.lines.list_lines().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn updating_a_missing_line_is_row_not_found() {
        let fixture = fixture().await;

        let result = fixture
            .lines
            .update_quantity(CartLineId::from_i64(999), 2)
            .await;

        assert!(
            matches!(result, Err(sqlx::Error::RowNotFound)),
            "expected RowNotFound, got {result:?}"
        );
    }
}

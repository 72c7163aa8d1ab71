//! Database connection management

use sqlx::{PgPool, migrate::MigrateError, query};

const RESET_STOREFRONT_SQL: &str = include_str!("sql/reset_storefront.sql");

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Remove every cart line and product and restart id sequences.
    ///
    /// # Errors
    ///
    /// Returns an error when the truncate fails; nothing is removed in that case.
    pub async fn reset(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(RESET_STOREFRONT_SQL).execute(&mut *tx).await?;

        tx.commit().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error when a migration fails or the applied history diverges.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartAggregator, CartsService, PgCartLinesRepository},
        products::{PgProductsRepository, ProductCatalog, ProductsService},
    },
    memory::MemoryStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>, carts: Arc<dyn CartsService>) -> Self {
        Self { products, carts }
    }

    /// Build application context from a database URL, optionally applying
    /// pending migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails or a
    /// migration cannot be applied.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migration)?;

            info!("database migrations applied");
        }

        Ok(Self::from_db(&Db::new(pool)))
    }

    /// Build application context over an existing database handle.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        let products = Arc::new(PgProductsRepository::new(db.clone()));
        let lines = Arc::new(PgCartLinesRepository::new(db.clone()));

        Self {
            products: Arc::new(ProductCatalog::new(products.clone())),
            carts: Arc::new(CartAggregator::new(lines, products)),
        }
    }

    /// Build application context over a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());

        Self {
            products: Arc::new(ProductCatalog::new(store.clone())),
            carts: Arc::new(CartAggregator::new(store.clone(), store)),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

//! Application bootstrap

use thiserror::Error;
use tracing::info;

use storefront_app::{
    context::{AppContext, AppInitError},
    domain::products::ProductsServiceError,
    seed,
};

use crate::config::{StorageBackend, storage::StorageConfig};

#[derive(Debug, Error)]
pub(crate) enum StartupError {
    #[error("DATABASE_URL is required when STORAGE=postgres")]
    MissingDatabaseUrl,

    #[error(transparent)]
    Init(#[from] AppInitError),

    #[error("failed to seed demo products")]
    Seed(#[source] ProductsServiceError),
}

/// Build the application context for the configured storage backend, seeding
/// the demo catalog when asked to and the catalog is empty.
pub(crate) async fn app_context(config: &StorageConfig) -> Result<AppContext, StartupError> {
    let app = match config.storage {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(StartupError::MissingDatabaseUrl)?;

            AppContext::from_database_url(url, config.run_migrations).await?
        }
        StorageBackend::Memory => {
            info!("using in-memory storage; data is lost on restart");

            AppContext::in_memory()
        }
    };

    if config.seed_demo_products {
        let seeded = seed::seed_if_empty(app.products.as_ref())
            .await
            .map_err(StartupError::Seed)?;

        info!(seeded, "demo catalog checked");
    }

    Ok(app)
}

//! Server configuration module

use clap::Parser;

use crate::config::{
    observability::LoggingConfig, server::ServerRuntimeConfig, storage::StorageConfig,
};

pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

pub(crate) use observability::LogFormat;
pub(crate) use storage::StorageBackend;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product and cart storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        ServerConfig::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_storefront_api() -> TestResult {
        let config = ServerConfig::try_parse_from(["storefront-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.server.cors_allow_origin, "*");
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);
        assert_eq!(config.storage.storage, StorageBackend::Postgres);
        assert!(config.storage.run_migrations);
        assert!(!config.storage.seed_demo_products);

        Ok(())
    }

    #[test]
    fn memory_storage_needs_no_database_url() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--storage",
            "memory",
            "--seed-demo-products",
            "true",
            "--port",
            "8080",
        ])?;

        assert_eq!(config.storage.storage, StorageBackend::Memory);
        assert!(config.storage.seed_demo_products);
        assert_eq!(config.server.port, 8080);

        Ok(())
    }
}

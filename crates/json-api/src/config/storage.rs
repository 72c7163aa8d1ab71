//! Storage Config

use clap::{ArgAction, Args};

/// Where products and cart lines live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// `PostgreSQL`, reached through `DATABASE_URL`.
    Postgres,

    /// Process memory; lost on restart.
    Memory,
}

/// Storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage backend (postgres, memory)
    #[arg(long, env = "STORAGE", value_enum, default_value_t = StorageBackend::Postgres)]
    pub storage: StorageBackend,

    /// `PostgreSQL` connection string, required for the postgres backend
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Apply pending migrations on startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = true, action = ArgAction::Set)]
    pub run_migrations: bool,

    /// Insert the demo products on startup when the catalog is empty
    #[arg(long, env = "SEED_DEMO_PRODUCTS", default_value_t = false, action = ArgAction::Set)]
    pub seed_demo_products: bool,
}

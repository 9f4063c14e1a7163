//! # Armory - Agent & Weapon Catalog API
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: SqliteLoadoutRepository or in-memory (adapter) │
//! │    ├── Creates: Catalog::standard() (domain)                   │
//! │    ├── Creates: DevModeIdentityProvider (gateway)              │
//! │    └── Runs: ApiServer until Ctrl+C / SIGTERM                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod config;

use std::sync::Arc;

use anyhow::Context;
use armory_adapter::repository::sqlite;
use armory_adapter::{
    ApiServer, AppState, DevModeIdentityProvider, InMemoryLoadoutRepository,
    SqliteLoadoutRepository,
};
use armory_domain::{Catalog, LoadoutRepository};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Armory");
    warn!("Dev-mode identity provider active: any non-empty bearer token is accepted as the user id");

    let catalog = Arc::new(Catalog::standard());

    if config.in_memory {
        info!("Using in-memory loadout store; data is lost on exit");
        serve(&config, catalog, InMemoryLoadoutRepository::new()).await
    } else {
        let pool = sqlite::connect(&config.database_url, config.max_connections)
            .await
            .with_context(|| format!("failed to open database {}", config.database_url))?;
        sqlite::ensure_schema(&pool)
            .await
            .context("failed to prepare loadouts schema")?;
        info!(database_url = %config.database_url, "Loadout store ready");

        serve(&config, catalog, SqliteLoadoutRepository::new(pool)).await
    }
}

async fn serve<R>(config: &Config, catalog: Arc<Catalog>, repository: R) -> anyhow::Result<()>
where
    R: LoadoutRepository + Clone + 'static,
{
    let state = AppState::new(catalog, repository, Arc::new(DevModeIdentityProvider));
    ApiServer::new(state, config.server())
        .run()
        .await
        .context("API server failed")
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use armory_domain::{Catalog, IdentityProvider, LoadoutRepository};
use armory_usecase::{LoadoutService, StatsService};
use tracing::info;

/// Shared application state.
///
/// `R` is a cheaply clonable repository handle (a pool or an `Arc`).
#[derive(Clone)]
pub struct AppState<R> {
    /// Read-only reference data.
    pub catalog: Arc<Catalog>,
    /// Loadout use cases.
    pub loadouts: LoadoutService<R>,
    /// Aggregate statistics.
    pub stats: StatsService<R>,
    /// Turns credentials into caller identities.
    pub identity: Arc<dyn IdentityProvider>,
}

impl<R: LoadoutRepository + Clone> AppState<R> {
    /// Creates a new application state.
    pub fn new(catalog: Arc<Catalog>, repository: R, identity: Arc<dyn IdentityProvider>) -> Self {
        info!(
            agents = catalog.agent_count(),
            weapons = catalog.weapon_count(),
            "Catalog loaded"
        );

        Self {
            loadouts: LoadoutService::new(repository.clone()),
            stats: StatsService::new(Arc::clone(&catalog), repository),
            catalog,
            identity,
        }
    }
}

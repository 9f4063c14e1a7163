//! Aggregate statistics
//!
//! Best-effort: if the store can't count, the loadout total is reported
//! as zero instead of failing the whole request.

use std::sync::Arc;

use armory_domain::{Catalog, LoadoutRepository};
use tracing::warn;

/// Reported as the most popular agent.
///
/// This is a fixed placeholder, not derived from stored loadouts.
pub const MOST_POPULAR_AGENT_PLACEHOLDER: &str = "Jett";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub agent_count: usize,
    pub weapon_count: usize,
    pub loadout_count: usize,
    pub most_popular_agent: &'static str,
}

#[derive(Debug, Clone)]
pub struct StatsService<R> {
    catalog: Arc<Catalog>,
    repository: R,
}

impl<R: LoadoutRepository> StatsService<R> {
    pub fn new(catalog: Arc<Catalog>, repository: R) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub async fn get_stats(&self) -> Stats {
        let loadout_count = match self.repository.count().await {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "Loadout count unavailable, reporting 0");
                0
            }
        };

        Stats {
            agent_count: self.catalog.agent_count(),
            weapon_count: self.catalog.weapon_count(),
            loadout_count,
            most_popular_agent: MOST_POPULAR_AGENT_PLACEHOLDER,
        }
    }
}

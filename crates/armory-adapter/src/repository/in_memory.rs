//! In-Memory Repository Implementation
//!
//! Simple in-memory implementation of the loadout repository.
//! Useful for testing and development; nothing survives a restart.

use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use armory_domain::model::loadout::{Loadout, LoadoutId, NewLoadout};
use armory_domain::model::owner::OwnerId;
use armory_domain::repository::loadout_repository::{LoadoutRepository, RepositoryError};

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    loadouts: Vec<Loadout>,
}

/// In-memory Loadout Repository
///
/// Thread-safe implementation using RwLock. Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoadoutRepository {
    rows: Arc<RwLock<Rows>>,
}

impl InMemoryLoadoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoadoutRepository for InMemoryLoadoutRepository {
    async fn create(&self, loadout: &NewLoadout) -> Result<LoadoutId, RepositoryError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| RepositoryError::persistence("Failed to acquire write lock"))?;

        rows.next_id += 1;
        let id = LoadoutId::new(rows.next_id);
        rows.loadouts.push(Loadout::restore(
            id,
            loadout.owner().clone(),
            loadout.agent(),
            loadout.primary().map(String::from),
            loadout.sidearm().map(String::from),
            SystemTime::now(),
        ));
        Ok(id)
    }

    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Loadout>, RepositoryError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| RepositoryError::persistence("Failed to acquire read lock"))?;

        let mut found: Vec<Loadout> = rows
            .loadouts
            .iter()
            .filter(|l| l.owner() == owner)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(found)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| RepositoryError::persistence("Failed to acquire read lock"))?;
        Ok(rows.loadouts.len())
    }
}

//! Loadout use cases - save and list a caller's loadouts

use armory_domain::{Loadout, LoadoutId, LoadoutRepository, NewLoadout, OwnerId};
use tracing::{debug, error};

use crate::error::LoadoutError;

/// Confirmation returned after a successful save
pub const SAVED_MESSAGE: &str = "Loadout saved successfully";

/// Input for creating a loadout. Empty weapon strings mean "no weapon".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLoadout {
    pub agent: String,
    pub primary: String,
    pub sidearm: String,
}

/// Output of a successful create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLoadout {
    pub id: LoadoutId,
    pub message: &'static str,
}

/// An owner's loadouts, newest first
#[derive(Debug, Clone)]
pub struct LoadoutListing {
    pub loadouts: Vec<Loadout>,
    pub total: usize,
}

/// Loadout operations for an already-identified caller
#[derive(Debug, Clone)]
pub struct LoadoutService<R> {
    repository: R,
}

impl<R: LoadoutRepository> LoadoutService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Save a loadout for `owner`
    pub async fn create_loadout(
        &self,
        owner: &OwnerId,
        request: CreateLoadout,
    ) -> Result<CreatedLoadout, LoadoutError> {
        let new = NewLoadout::new(owner.clone(), request.agent)
            .with_primary(request.primary)
            .with_sidearm(request.sidearm);

        let id = self.repository.create(&new).await.map_err(|source| {
            error!(owner = %owner, error = %source, "Failed to create loadout");
            LoadoutError::CreateFailed { source }
        })?;

        debug!(owner = %owner, loadout_id = %id, agent = new.agent(), "Loadout created");

        Ok(CreatedLoadout {
            id,
            message: SAVED_MESSAGE,
        })
    }

    /// List `owner`'s loadouts; `total` is the length of the list
    pub async fn list_loadouts(&self, owner: &OwnerId) -> Result<LoadoutListing, LoadoutError> {
        let loadouts = self.repository.list_by_owner(owner).await.map_err(|source| {
            error!(owner = %owner, error = %source, "Failed to list loadouts");
            LoadoutError::ListFailed { source }
        })?;

        let total = loadouts.len();
        Ok(LoadoutListing { loadouts, total })
    }
}

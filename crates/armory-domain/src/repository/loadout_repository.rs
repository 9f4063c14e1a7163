//! Loadout Repository - Abstract persistence for Loadouts
//!
//! This trait defines what operations the domain needs.
//! How they're implemented (SQLite, memory) is not our concern here.

use core::future::Future;

use crate::model::loadout::{Loadout, LoadoutId, NewLoadout};
use crate::model::owner::OwnerId;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store rejected or failed the operation
    PersistenceError { message: String },
}

impl RepositoryError {
    pub fn persistence(message: impl Into<String>) -> Self {
        RepositoryError::PersistenceError {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Loadout Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// The store exclusively owns persisted loadouts; every method is one
/// atomic statement against it.
///
/// Methods return `Send` futures so handlers can run them on a
/// multi-threaded runtime. Dropping a future abandons the operation.
pub trait LoadoutRepository: Send + Sync {
    /// Insert a loadout and return its store-assigned identity
    fn create(
        &self,
        loadout: &NewLoadout,
    ) -> impl Future<Output = Result<LoadoutId, RepositoryError>> + Send;

    /// All loadouts of `owner`, newest first.
    ///
    /// Loadouts created within the same clock tick are ordered by identity,
    /// highest first. An owner without loadouts gets an empty vector.
    fn list_by_owner(
        &self,
        owner: &OwnerId,
    ) -> impl Future<Output = Result<Vec<Loadout>, RepositoryError>> + Send;

    /// Total number of loadouts across all owners
    fn count(&self) -> impl Future<Output = Result<usize, RepositoryError>> + Send;
}

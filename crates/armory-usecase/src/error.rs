//! Use case errors
//!
//! These carry the underlying repository error for logging, but their
//! `Display` never includes it: what a caller sees is only the operation
//! that failed.

use armory_domain::RepositoryError;

/// Failures of the loadout use cases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadoutError {
    /// The store could not save the loadout
    CreateFailed { source: RepositoryError },
    /// The store could not list the owner's loadouts
    ListFailed { source: RepositoryError },
}

impl LoadoutError {
    /// The storage-level cause, for server-side logs only
    pub fn cause(&self) -> &RepositoryError {
        match self {
            LoadoutError::CreateFailed { source } | LoadoutError::ListFailed { source } => source,
        }
    }
}

impl core::fmt::Display for LoadoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LoadoutError::CreateFailed { .. } => write!(f, "failed to create loadout"),
            LoadoutError::ListFailed { .. } => write!(f, "failed to get loadouts"),
        }
    }
}

impl std::error::Error for LoadoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause())
    }
}

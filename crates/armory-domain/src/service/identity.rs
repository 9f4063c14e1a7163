//! Identity - Turning a caller's credential into an OwnerId
//!
//! This is a PORT: the HTTP layer only ever talks to `dyn IdentityProvider`,
//! so a verifying implementation can replace the development one without
//! touching any handler.

use crate::model::owner::OwnerId;

/// Authentication failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No usable credential was presented
    Unauthenticated,
}

impl core::fmt::Display for AuthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AuthError::Unauthenticated => write!(f, "Unauthenticated"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Resolves a raw credential to a caller identity
pub trait IdentityProvider: Send + Sync {
    /// Returns the caller's identity, or `AuthError::Unauthenticated`.
    fn resolve(&self, credential: &str) -> Result<OwnerId, AuthError>;
}

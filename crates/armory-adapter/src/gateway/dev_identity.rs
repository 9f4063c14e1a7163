//! Development-mode identity provider
//!
//! Accepts ANY non-empty credential and uses it, lowercased, as the
//! caller's identity. There is no signature or registry check. Do not
//! expose a server wired with this provider to untrusted callers.

use armory_domain::{AuthError, IdentityProvider, OwnerId};

/// Permissive [`IdentityProvider`] for local development
#[derive(Debug, Clone, Copy, Default)]
pub struct DevModeIdentityProvider;

impl DevModeIdentityProvider {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityProvider for DevModeIdentityProvider {
    fn resolve(&self, credential: &str) -> Result<OwnerId, AuthError> {
        let token = credential.trim();
        OwnerId::try_new(token.to_lowercase()).ok_or(AuthError::Unauthenticated)
    }
}

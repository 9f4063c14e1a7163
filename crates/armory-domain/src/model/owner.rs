//! OwnerId - Who a loadout belongs to
//!
//! An OwnerId is produced by an identity provider from the caller's
//! credential. It is opaque to the domain; the only rule is that it is
//! never empty.

/// Non-empty caller identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    /// Returns `None` for an empty identifier.
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Loadout - A user's saved agent + weapon combination
//!
//! Loadout is an Entity: its identity is assigned by the store at insert
//! time and never changes afterwards.
//!
//! Weapon slots are optional on the way in and plain strings on the way
//! out. "No weapon" and "empty string" are the same thing here: an empty
//! slot is stored as absent, and an absent slot is read back as `""`.

use std::time::SystemTime;

use super::owner::OwnerId;

/// Store-assigned identity of a Loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadoutId(i64);

impl LoadoutId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for LoadoutId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A loadout that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoadout {
    owner: OwnerId,
    agent: String,
    primary: Option<String>,
    sidearm: Option<String>,
}

impl NewLoadout {
    pub fn new(owner: OwnerId, agent: impl Into<String>) -> Self {
        Self {
            owner,
            agent: agent.into(),
            primary: None,
            sidearm: None,
        }
    }

    /// Builder: set the primary weapon. An empty string leaves the slot empty.
    pub fn with_primary(mut self, weapon: impl Into<String>) -> Self {
        self.primary = non_empty(weapon.into());
        self
    }

    /// Builder: set the sidearm. An empty string leaves the slot empty.
    pub fn with_sidearm(mut self, weapon: impl Into<String>) -> Self {
        self.sidearm = non_empty(weapon.into());
        self
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn sidearm(&self) -> Option<&str> {
        self.sidearm.as_deref()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// A persisted loadout
#[derive(Debug, Clone)]
pub struct Loadout {
    id: LoadoutId,
    owner: OwnerId,
    agent: String,
    primary: String,
    sidearm: String,
    created_at: SystemTime,
}

impl Loadout {
    /// Rebuild a Loadout from stored values. Absent weapon slots become `""`.
    pub fn restore(
        id: LoadoutId,
        owner: OwnerId,
        agent: impl Into<String>,
        primary: Option<String>,
        sidearm: Option<String>,
        created_at: SystemTime,
    ) -> Self {
        Self {
            id,
            owner,
            agent: agent.into(),
            primary: primary.unwrap_or_default(),
            sidearm: sidearm.unwrap_or_default(),
            created_at,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> LoadoutId {
        self.id
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn sidearm(&self) -> &str {
        &self.sidearm
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

impl PartialEq for Loadout {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Loadout {}

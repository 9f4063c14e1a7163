//! Catalog - The read-only reference data service
//!
//! Holds every Agent and Weapon the service knows about and answers
//! filtered queries over them. There is no mutation API: a Catalog is
//! assembled once at startup and then shared for concurrent reads.
//!
//! Filtering is a linear scan. Results keep catalog order.

use crate::model::agent::Agent;
use crate::model::weapon::Weapon;

use super::catalog_data;

/// Agent filter. Empty fields mean "no filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentQuery<'a> {
    /// Exact, case-sensitive role match
    pub role: &'a str,
    /// Case-insensitive substring of name or description
    pub search: &'a str,
}

/// Weapon filter. Empty fields and a non-positive `max_cost` mean "no filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeaponQuery<'a> {
    /// Exact category match ("Primary" / "Sidearm")
    pub category: &'a str,
    /// Inclusive upper bound on cost; `<= 0` disables it
    pub max_cost: i64,
    /// Case-insensitive substring of the name
    pub search: &'a str,
}

impl AgentQuery<'_> {
    /// Check whether `agent` passes this filter
    pub fn matches(&self, agent: &Agent) -> bool {
        if !self.role.is_empty() && agent.role() != self.role {
            return false;
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            return agent.name().to_lowercase().contains(&needle)
                || agent.description().to_lowercase().contains(&needle);
        }

        true
    }
}

impl WeaponQuery<'_> {
    /// Check whether `weapon` passes this filter
    pub fn matches(&self, weapon: &Weapon) -> bool {
        if !self.category.is_empty() && weapon.category() != self.category {
            return false;
        }

        if self.max_cost > 0 && i64::from(weapon.cost()) > self.max_cost {
            return false;
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            return weapon.name().to_lowercase().contains(&needle);
        }

        true
    }
}

/// Immutable collection of reference data
#[derive(Debug, Clone)]
pub struct Catalog {
    agents: Vec<Agent>,
    weapons: Vec<Weapon>,
}

impl Catalog {
    /// Build a catalog from explicit lists (catalog order = given order)
    pub fn new(agents: Vec<Agent>, weapons: Vec<Weapon>) -> Self {
        Self { agents, weapons }
    }

    /// The built-in reference data shipped with the service
    pub fn standard() -> Self {
        Self::new(catalog_data::agents(), catalog_data::weapons())
    }

    /// Agents matching `query`, in catalog order
    pub fn list_agents(&self, query: &AgentQuery<'_>) -> Vec<&Agent> {
        self.agents.iter().filter(|a| query.matches(a)).collect()
    }

    /// Weapons matching `query`, in catalog order
    pub fn list_weapons(&self, query: &WeaponQuery<'_>) -> Vec<&Weapon> {
        self.weapons.iter().filter(|w| query.matches(w)).collect()
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }
}

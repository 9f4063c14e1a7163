//! Catalog queries
//!
//! Thin wrappers that pair a filtered list with its length.

use armory_domain::{Agent, AgentQuery, Catalog, Weapon, WeaponQuery};

/// Filtered agents plus how many there are
#[derive(Debug, Clone)]
pub struct AgentListing<'a> {
    pub agents: Vec<&'a Agent>,
    pub total: usize,
}

/// Filtered weapons plus how many there are
#[derive(Debug, Clone)]
pub struct WeaponListing<'a> {
    pub weapons: Vec<&'a Weapon>,
    pub total: usize,
}

pub fn list_agents<'a>(catalog: &'a Catalog, query: &AgentQuery<'_>) -> AgentListing<'a> {
    let agents = catalog.list_agents(query);
    let total = agents.len();
    AgentListing { agents, total }
}

pub fn list_weapons<'a>(catalog: &'a Catalog, query: &WeaponQuery<'_>) -> WeaponListing<'a> {
    let weapons = catalog.list_weapons(query);
    let total = weapons.len();
    WeaponListing { weapons, total }
}

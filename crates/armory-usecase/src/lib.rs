//! # Armory Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//! inbound adapters (HTTP) call these use cases, which call the catalog or
//! the loadout store through its port.
//!
//! Callers of [`LoadoutService`] must already hold a resolved [`OwnerId`];
//! an unidentified caller never gets this far.
//!
//! [`OwnerId`]: armory_domain::OwnerId

pub mod catalog;
pub mod error;
pub mod health;
pub mod loadout;
pub mod stats;

pub use armory_domain;

pub use catalog::{list_agents, list_weapons, AgentListing, WeaponListing};
pub use error::LoadoutError;
pub use health::{health_check, HealthReport};
pub use loadout::{CreateLoadout, CreatedLoadout, LoadoutListing, LoadoutService};
pub use stats::{Stats, StatsService, MOST_POPULAR_AGENT_PLACEHOLDER};

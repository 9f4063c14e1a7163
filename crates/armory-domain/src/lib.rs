//! # Armory Domain Layer
//!
//! Pure business logic for the agent & loadout reference service, with
//! zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Agent, Weapon, Loadout, OwnerId               ││
//! │  │  repository/- LoadoutRepository port                        ││
//! │  │  service/   - Catalog, IdentityProvider port                ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If we switch from SQLite to PostgreSQL, this crate doesn't change.
//! If we swap the development identity provider for a real verifier,
//! this crate doesn't change either.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    agent::{Agent, AgentId},
    loadout::{Loadout, LoadoutId, NewLoadout},
    owner::OwnerId,
    weapon::{Weapon, WeaponId},
};

pub use repository::loadout_repository::{LoadoutRepository, RepositoryError};

pub use service::catalog::{AgentQuery, Catalog, WeaponQuery};
pub use service::identity::{AuthError, IdentityProvider};

//! Domain Models - The vocabulary of Armory
//!
//! Agents and weapons are static reference data; loadouts are the only
//! thing users create.

pub mod agent;
pub mod loadout;
pub mod owner;
pub mod weapon;

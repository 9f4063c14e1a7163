//! Domain Services - Logic that doesn't belong to a single entity

pub mod catalog;
mod catalog_data;
pub mod identity;

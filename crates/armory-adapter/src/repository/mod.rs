//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from armory-domain.

mod error;
pub mod in_memory;
pub mod sqlite;

pub use error::DbError;

//! # Armory Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (HTTP API)
//! - `gateway/` - Outbound adapters (identity provider)
//! - `repository/` - Persistence implementations (SQLite, in-memory)

pub mod controller;
pub mod gateway;
pub mod repository;

pub use controller::http::{create_router, ApiServer, ApiServerConfig, AppState};
pub use gateway::dev_identity::DevModeIdentityProvider;
pub use repository::in_memory::InMemoryLoadoutRepository;
pub use repository::sqlite::SqliteLoadoutRepository;

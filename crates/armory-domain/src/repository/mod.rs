//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the domain wants to persist data,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────────
//! trait LoadoutRepo     │  SqliteLoadoutRepository
//!   fn create()         │  InMemoryLoadoutRepository
//!   fn list_by_owner()  │
//!   fn count()          │
//! ```

pub mod loadout_repository;

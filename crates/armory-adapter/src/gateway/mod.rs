//! Outbound Adapters - Collaborators outside the process boundary
//!
//! Only identity resolution lives here today.

pub mod dev_identity;

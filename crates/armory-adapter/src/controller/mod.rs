//! Inbound Adapters - How requests reach the use cases

pub mod http;

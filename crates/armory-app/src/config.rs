//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::time::Duration;

use armory_adapter::ApiServerConfig;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "armory")]
#[command(about = "Armory - agent & weapon catalog and loadout API")]
#[command(version)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ARMORY_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// SQLite database URL
    #[arg(long, env = "ARMORY_DATABASE_URL", default_value = "sqlite://armory.db")]
    pub database_url: String,

    /// Keep loadouts in process memory instead of SQLite
    #[arg(long, env = "ARMORY_IN_MEMORY")]
    pub in_memory: bool,

    /// Seconds before an in-flight request is abandoned
    #[arg(long, env = "ARMORY_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Maximum pooled database connections
    #[arg(long, env = "ARMORY_DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Log filter directive (overridden by RUST_LOG)
    #[arg(long, env = "ARMORY_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "ARMORY_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn server(&self) -> ApiServerConfig {
        ApiServerConfig {
            bind_address: self.bind,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

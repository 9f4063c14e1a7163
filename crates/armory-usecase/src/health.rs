//! Liveness report
//!
//! Reports that the process is up. It deliberately checks nothing else.

use std::time::SystemTime;

pub const HEALTHY: &str = "healthy";
pub const HEALTH_MESSAGE: &str = "Armory API is running";

/// Result of a health check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: SystemTime,
    pub version: &'static str,
}

pub fn health_check() -> HealthReport {
    HealthReport {
        status: HEALTHY,
        message: HEALTH_MESSAGE,
        timestamp: SystemTime::now(),
        version: env!("CARGO_PKG_VERSION"),
    }
}

//! Configuration module

use std::env;

/// Default score threshold below which transactions are auto-approved.
pub const DEFAULT_AUTO_APPROVE_BELOW: i64 = 20;

/// Default score threshold at or above which transactions are auto-blocked.
pub const DEFAULT_AUTO_BLOCK_ABOVE: i64 = 80;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data/pearlmarket.db?mode=rwc".to_string()),
        }
    }
}

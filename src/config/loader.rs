//! Environment overrides
//!
//! Variables are read through a lookup function so the same code path serves
//! the real process environment and tests.

use super::models::*;
use crate::utils::error::{MarketError, Result};
use std::path::PathBuf;
use tracing::debug;

pub const ENV_HOST: &str = "ESTATE_HOST";
pub const ENV_PORT: &str = "ESTATE_PORT";
pub const ENV_WORKERS: &str = "ESTATE_WORKERS";
pub const ENV_LOG_LEVEL: &str = "ESTATE_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "ESTATE_LOG_JSON";
pub const ENV_LISTINGS_SEED: &str = "ESTATE_LISTINGS_SEED";
pub const ENV_RBAC_DIAGNOSTICS: &str = "ESTATE_RBAC_DIAGNOSTICS";

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(MarketError::config(format!(
            "Invalid boolean for {}: {}",
            name, other
        ))),
    }
}

impl MarketConfig {
    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| MarketError::config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup(ENV_WORKERS) {
            self.server.workers = Some(
                workers
                    .trim()
                    .parse()
                    .map_err(|e| MarketError::config(format!("Invalid workers count: {}", e)))?,
            );
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            self.logging.json = parse_bool(ENV_LOG_JSON, &json)?;
        }
        if let Some(seed) = lookup(ENV_LISTINGS_SEED) {
            self.listings.seed_file = Some(PathBuf::from(seed));
        }
        if let Some(diagnostics) = lookup(ENV_RBAC_DIAGNOSTICS) {
            self.auth.rbac.diagnostics = parse_bool(ENV_RBAC_DIAGNOSTICS, &diagnostics)?;
        }

        Ok(self)
    }
}

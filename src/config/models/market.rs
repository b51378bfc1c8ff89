//! Top-level marketplace configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main marketplace configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarketConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authorization configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Listing catalog configuration
    #[serde(default)]
    pub listings: ListingsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MarketConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.auth = self.auth.merge(other.auth);
        self.listings = self.listings.merge(other.listings);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

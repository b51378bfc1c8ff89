//! Configuration management for the marketplace
//!
//! This module handles loading, validation, and management of all configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MarketError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/estate.yaml";

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Marketplace configuration
    pub app: MarketConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MarketError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let app: MarketConfig = serde_yaml::from_str(content)
            .map_err(|e| MarketError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let app = MarketConfig::default().with_env_overrides()?;
        let config = Self { app };

        config.validate()?;
        Ok(config)
    }

    /// Load the file if present, then apply environment overrides
    ///
    /// A missing file falls back to defaults; an unreadable or invalid one is an error.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let base = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            warn!("Configuration file {:?} not found, using defaults", path);
            Self::default()
        };

        let config = Self {
            app: base.app.with_env_overrides()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.app.auth.rbac
    }

    /// Get listing catalog configuration
    pub fn listings(&self) -> &ListingsConfig {
        &self.app.listings
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.app.validate().map_err(MarketError::Config)?;
        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.app = self.app.merge(other.app);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| MarketError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

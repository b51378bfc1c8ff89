//! Seed data loading for the catalog

use super::service::ListingCatalog;
use crate::config::ListingsConfig;
use crate::core::listings::Listing;
use crate::utils::error::{MarketError, Result};
use std::path::Path;
use tracing::{debug, info};

impl ListingCatalog {
    /// Build the catalog from configuration, seeding it when a file is named
    pub async fn from_config(config: &ListingsConfig) -> Result<Self> {
        match &config.seed_file {
            Some(path) => Self::load_from_file(path).await,
            None => {
                info!("No listing seed file configured, starting with an empty catalog");
                Ok(Self::new())
            }
        }
    }

    /// Load listings from a JSON array on disk
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading listings from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            MarketError::config(format!("Failed to read listing seed file {:?}: {}", path, e))
        })?;

        let listings: Vec<Listing> = serde_json::from_str(&content).map_err(|e| {
            MarketError::config(format!("Failed to parse listing seed file {:?}: {}", path, e))
        })?;

        debug!("Parsed {} listings from seed file", listings.len());
        Self::with_listings(listings)
    }
}

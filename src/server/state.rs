//! Application state shared across HTTP handlers

use crate::auth::rbac::PermissionTable;
use crate::config::Config;
use crate::services::ListingCatalog;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// The permission table and configuration are read-only after startup; the
/// catalog synchronizes its own mutations.
#[derive(Clone)]
pub struct AppState {
    /// Configuration (shared read-only)
    pub config: Arc<Config>,
    /// Permission table (shared read-only)
    pub permissions: Arc<PermissionTable>,
    /// Listing catalog
    pub catalog: ListingCatalog,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, permissions: PermissionTable, catalog: ListingCatalog) -> Self {
        Self {
            config: Arc::new(config),
            permissions: Arc::new(permissions),
            catalog,
        }
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

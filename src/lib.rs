//! # Estate Hub
//!
//! Backend for a real estate marketplace. Agents, developers, sellers and
//! administrators share one dashboard; what each of them may see and do is
//! decided by a single immutable permission table.
//!
//! ## Features
//!
//! - **Closed role model**: four roles, eleven resources, five actions and
//!   nine capability flags, all as enums
//! - **Fail-closed string boundary**: unknown roles, permissions or resources
//!   are denied, never rejected with an error
//! - **Dashboard helpers**: view and action gates plus role-filtered navigation
//! - **Listing search**: filtering, sorting and pagination over the catalog
//! - **HTTP API**: actix-web endpoints for permission queries and gated listings
//!
//! ## Permission checks
//!
//! ```rust
//! use estate_hub::{Action, Permission, PermissionTable, Resource, Role};
//!
//! let table = PermissionTable::standard();
//!
//! assert!(table.has_permission(Role::Agent, Permission::CAN_EDIT, Some(Resource::Properties)));
//! assert!(!table.can_perform_action(Role::Seller, Action::Approve, Resource::Properties));
//!
//! // Session roles arrive as strings; unknown ones are denied
//! assert!(!table.has_permission_str("visitor", "canView", None));
//! ```
//!
//! ## Server mode
//!
//! ```rust,no_run
//! use estate_hub::{Config, Marketplace};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/estate.yaml").await?;
//!     let marketplace = Marketplace::new(config).await?;
//!     marketplace.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use auth::guard::ViewGate;
pub use auth::rbac::{
    AccessObserver, Action, Capability, Permission, PermissionTable, Resource, Role, RoleInfo,
    RolePermissions, TracingObserver, Unrecognized,
};
pub use config::Config;
pub use core::listings::{Listing, ListingFilter, ListingQuery, ListingSort};
pub use core::navigation::{NavEntry, build_navigation};
pub use services::ListingCatalog;
pub use utils::error::{MarketError, Result};

use tracing::info;

/// Marketplace backend: configuration plus a ready-to-start HTTP server
pub struct Marketplace {
    config: Config,
    server: server::HttpServer,
}

impl Marketplace {
    /// Create a new marketplace instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating marketplace instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the HTTP server until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting marketplace on {}", self.config.server().address());
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

/// Build information recorded by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
    }
}

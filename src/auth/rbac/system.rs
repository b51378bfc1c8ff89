//! Permission table core functionality

use crate::config::RbacConfig;
use crate::utils::error::{MarketError, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::observer::{AccessObserver, TracingObserver, Unrecognized};
use super::types::{Role, RolePermissions};

/// Immutable role -> permission mapping
///
/// Built once at startup and shared behind an `Arc`. Every registered role has
/// exactly one fully-populated record.
#[derive(Clone)]
pub struct PermissionTable {
    /// One record per role, indexed by `Role::index`
    pub(super) entries: [RolePermissions; 4],
    /// Optional diagnostics hook
    pub(super) observer: Option<Arc<dyn AccessObserver>>,
}

impl PermissionTable {
    /// Table with the hand-specified records of every role
    pub fn standard() -> Self {
        Self {
            entries: Role::ALL.map(|role| role.default_permissions()),
            observer: None,
        }
    }

    /// Build the standard table with the diagnostics the config asks for
    pub fn from_config(config: &RbacConfig) -> Self {
        info!("Initializing permission table");

        let table = Self::standard();
        let table = if config.diagnostics {
            debug!("Permission diagnostics enabled");
            table.with_observer(Arc::new(TracingObserver))
        } else {
            table
        };

        info!("Permission table initialized with {} roles", Role::ALL.len());
        table
    }

    /// Build a table from explicit records
    ///
    /// Fails unless every role appears exactly once with a non-empty view set.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Role, RolePermissions)>,
    {
        let mut slots: [Option<RolePermissions>; 4] = Default::default();

        for (role, permissions) in entries {
            if permissions.can_view.is_empty() {
                return Err(MarketError::config(format!(
                    "Role '{}' must be able to view at least one resource",
                    role
                )));
            }
            let slot = &mut slots[role.index()];
            if slot.is_some() {
                return Err(MarketError::config(format!(
                    "Role '{}' has more than one permission entry",
                    role
                )));
            }
            *slot = Some(permissions);
        }

        let [agent, developer, seller, admin] = slots;
        match (agent, developer, seller, admin) {
            (Some(agent), Some(developer), Some(seller), Some(admin)) => Ok(Self {
                entries: [agent, developer, seller, admin],
                observer: None,
            }),
            (agent, developer, seller, admin) => {
                let missing: Vec<&str> = [agent.is_none(), developer.is_none(), seller.is_none(), admin.is_none()]
                    .into_iter()
                    .zip(Role::ALL)
                    .filter(|(absent, _)| *absent)
                    .map(|(_, role)| role.as_str())
                    .collect();
                Err(MarketError::config(format!(
                    "Missing permission entries for roles: {}",
                    missing.join(", ")
                )))
            }
        }
    }

    /// Attach a diagnostics hook
    pub fn with_observer(mut self, observer: Arc<dyn AccessObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Whether a diagnostics hook is attached
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Full record of a role
    pub fn permissions(&self, role: Role) -> &RolePermissions {
        &self.entries[role.index()]
    }

    /// Record of a role given as an opaque session string
    pub fn lookup(&self, role: &str) -> Option<&RolePermissions> {
        self.resolve_role(role).map(|role| self.permissions(role))
    }

    /// List all roles with their records
    pub fn list_roles(&self) -> impl Iterator<Item = (Role, &RolePermissions)> {
        Role::ALL.into_iter().map(|role| (role, self.permissions(role)))
    }

    pub(super) fn report(&self, input: &Unrecognized<'_>) {
        if let Some(observer) = &self.observer {
            observer.on_unrecognized(input);
        }
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for PermissionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionTable")
            .field("entries", &self.entries)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

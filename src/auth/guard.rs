//! Guard decisions for rendering collaborators
//!
//! A view gate replaces a whole region with a denial state. An action gate
//! hides a single trigger entirely; there is no disabled variant.

use crate::auth::rbac::{Action, Permission, PermissionTable, Resource, Role};
use crate::utils::error::{MarketError, Result};
use tracing::debug;

/// Outcome of a view gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewGate<T> {
    /// Permission held; carries the rendered content
    Granted(T),
    /// Permission missing; the content was never rendered
    Denied,
}

impl<T> ViewGate<T> {
    pub fn is_granted(&self) -> bool {
        matches!(self, ViewGate::Granted(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            ViewGate::Granted(content) => Some(content),
            ViewGate::Denied => None,
        }
    }

    /// Content when granted, otherwise the caller's denial state
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, denied: F) -> T {
        match self {
            ViewGate::Granted(content) => content,
            ViewGate::Denied => denied(),
        }
    }
}

impl PermissionTable {
    /// Gate a region on `has_permission`; `render` only runs when granted
    pub fn view_gate<T, F>(
        &self,
        role: Option<Role>,
        permission: Permission,
        resource: Option<Resource>,
        render: F,
    ) -> ViewGate<T>
    where
        F: FnOnce() -> T,
    {
        match role {
            Some(role) if self.has_permission(role, permission, resource) => {
                ViewGate::Granted(render())
            }
            _ => ViewGate::Denied,
        }
    }

    /// Gate an action trigger on `can_perform_action`; `None` means render nothing
    pub fn action_gate<T, F>(
        &self,
        role: Option<Role>,
        action: Action,
        resource: Resource,
        render: F,
    ) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        role.filter(|role| self.can_perform_action(*role, action, resource))
            .map(|_| render())
    }

    /// Request-level gate: deny with a forbidden error
    pub fn require_action(
        &self,
        role: Option<Role>,
        action: Action,
        resource: Resource,
    ) -> Result<Role> {
        match role {
            Some(role) if self.can_perform_action(role, action, resource) => Ok(role),
            Some(role) => {
                debug!("Role {} denied {} on {}", role, action, resource);
                Err(MarketError::forbidden(format!(
                    "Role '{}' cannot {} {}",
                    role, action, resource
                )))
            }
            None => Err(MarketError::forbidden(format!(
                "An authenticated dashboard role is required to {} {}",
                action, resource
            ))),
        }
    }
}

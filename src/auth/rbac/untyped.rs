//! String-keyed queries for the session boundary
//!
//! The session provider hands roles over as opaque strings and older callers
//! still name permissions and resources by string. Everything is parsed once
//! here; anything unrecognized is denied.

use std::collections::BTreeSet;

use super::observer::Unrecognized;
use super::roles::{UNKNOWN_ROLE_COLOR, UNKNOWN_ROLE_NAME};
use super::system::PermissionTable;
use super::types::{Action, Permission, Resource, Role};

impl PermissionTable {
    /// Parse a session role, reporting it when unrecognized
    pub fn resolve_role(&self, role: &str) -> Option<Role> {
        let parsed = Role::parse(role);
        if parsed.is_none() {
            self.report(&Unrecognized::Role(role));
        }
        parsed
    }

    fn parse_resource(&self, resource: &str) -> Option<Resource> {
        let parsed = Resource::parse(resource);
        if parsed.is_none() {
            self.report(&Unrecognized::Resource(resource));
        }
        parsed
    }

    /// `has_permission` over strings, e.g. `("admin", "canManageUsers", None)`
    pub fn has_permission_str(&self, role: &str, permission: &str, resource: Option<&str>) -> bool {
        let Some(role) = self.resolve_role(role) else {
            return false;
        };
        let Some(parsed) = Permission::parse(permission) else {
            self.report(&Unrecognized::Permission(permission));
            return false;
        };

        match (parsed, resource) {
            (Permission::Capability(_), _) | (_, None) => self.has_permission(role, parsed, None),
            (Permission::Action(_), Some(resource)) => match self.parse_resource(resource) {
                Some(resource) => self.has_permission(role, parsed, Some(resource)),
                None => false,
            },
        }
    }

    /// `can_perform_action` over strings, e.g. `("agent", "delete", "users")`
    ///
    /// Only the mutating verbs are accepted here.
    pub fn can_perform_action_str(&self, role: &str, action: &str, resource: &str) -> bool {
        let Some(role) = self.resolve_role(role) else {
            return false;
        };
        let action = match Action::parse(action) {
            Some(parsed) if parsed.is_mutation() => parsed,
            _ => {
                self.report(&Unrecognized::Action(action));
                return false;
            }
        };
        let Some(resource) = self.parse_resource(resource) else {
            return false;
        };

        self.can_perform_action(role, action, resource)
    }

    /// Viewable resources of a role string, empty when the role is unknown
    pub fn accessible_tabs_str(&self, role: &str) -> BTreeSet<Resource> {
        self.resolve_role(role)
            .map(|role| self.accessible_tabs(role).clone())
            .unwrap_or_default()
    }
}

/// Display name of a role string
pub fn role_display_name(role: &str) -> &'static str {
    Role::parse(role)
        .map(|role| role.display_name())
        .unwrap_or(UNKNOWN_ROLE_NAME)
}

/// Color token of a role string
pub fn role_color(role: &str) -> &'static str {
    Role::parse(role)
        .map(|role| role.color())
        .unwrap_or(UNKNOWN_ROLE_COLOR)
}

//! Permission checking methods

use std::collections::BTreeSet;

use super::observer::Unrecognized;
use super::system::PermissionTable;
use super::types::{Action, Permission, Resource, Role};

impl PermissionTable {
    /// Check a permission field of a role
    ///
    /// Resource-scoped permissions test membership of `resource` in the
    /// matching set. `canView` without a resource answers whether the role can
    /// view anything at all; any other resource-scoped permission without a
    /// resource is denied. Capability flags ignore `resource`.
    pub fn has_permission(
        &self,
        role: Role,
        permission: Permission,
        resource: Option<Resource>,
    ) -> bool {
        let record = self.permissions(role);

        match (permission, resource) {
            (Permission::Capability(capability), _) => record.capability(capability),
            (Permission::Action(action), Some(resource)) => record.allows(action, resource),
            (Permission::Action(Action::View), None) => !record.can_view.is_empty(),
            (Permission::Action(_), None) => {
                self.report(&Unrecognized::MissingResource { role, permission });
                false
            }
        }
    }

    /// Check a resource-scoped action of a role
    pub fn can_perform_action(&self, role: Role, action: Action, resource: Resource) -> bool {
        self.permissions(role).allows(action, resource)
    }

    /// Resources the role may view, used to pick the dashboard tabs
    pub fn accessible_tabs(&self, role: Role) -> &BTreeSet<Resource> {
        &self.permissions(role).can_view
    }

    /// Whether the role holds every listed permission on a resource
    pub fn has_all(&self, role: Role, actions: &[Action], resource: Resource) -> bool {
        actions
            .iter()
            .all(|action| self.can_perform_action(role, *action, resource))
    }

    /// Whether the role holds at least one of the listed permissions on a resource
    pub fn has_any(&self, role: Role, actions: &[Action], resource: Resource) -> bool {
        actions
            .iter()
            .any(|action| self.can_perform_action(role, *action, resource))
    }

    /// Roles allowed to perform an action on a resource
    pub fn roles_allowed(&self, action: Action, resource: Resource) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.can_perform_action(*role, action, resource))
            .collect()
    }
}

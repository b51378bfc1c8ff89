//! Permission table integration tests

#[cfg(test)]
mod tests {
    use crate::common::RecordingObserver;
    use crate::common::assertions::assert_superset;
    use estate_hub::auth::rbac::{role_color, role_display_name};
    use estate_hub::core::navigation::{MASTER_NAVIGATION, build_navigation, build_navigation_str};
    use estate_hub::{Action, Capability, Permission, PermissionTable, Resource, Role, ViewGate};
    use std::sync::Arc;

    // ==================== Role matrix ====================

    #[test]
    fn test_admin_dominates_every_role() {
        let table = PermissionTable::standard();
        for role in Role::ALL {
            assert_superset(&table, Role::Admin, role);
        }
    }

    #[test]
    fn test_developer_project_pipeline() {
        let table = PermissionTable::standard();

        for action in [Action::Create, Action::Edit, Action::Delete] {
            assert!(table.can_perform_action(Role::Developer, action, Resource::Projects));
            assert!(table.can_perform_action(Role::Developer, action, Resource::Units));
        }
        assert!(table.can_perform_action(Role::Developer, Action::Approve, Resource::Units));
        assert!(!table.can_perform_action(Role::Developer, Action::Approve, Resource::Projects));
        assert!(!table.can_perform_action(Role::Developer, Action::Delete, Resource::Properties));
    }

    #[test]
    fn test_only_admin_manages_users() {
        let table = PermissionTable::standard();
        let managers: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|role| table.permissions(*role).capability(Capability::ManageUsers))
            .collect();
        assert_eq!(managers, vec![Role::Admin]);
        assert_eq!(
            table.roles_allowed(Action::Approve, Resource::Properties),
            vec![Role::Admin]
        );
    }

    #[test]
    fn test_agent_and_seller_differ_only_in_events() {
        let table = PermissionTable::standard();
        let agent = table.permissions(Role::Agent);
        let seller = table.permissions(Role::Seller);

        let diff: Vec<Resource> = agent.can_view.difference(&seller.can_view).copied().collect();
        assert_eq!(diff, vec![Resource::Events]);
        assert_eq!(agent.can_create, seller.can_create);
        assert_eq!(agent.can_delete, seller.can_delete);
    }

    // ==================== String boundary ====================

    #[test]
    fn test_session_strings_resolve_like_typed_roles() {
        let table = PermissionTable::standard();

        for role in Role::ALL {
            for resource in Resource::ALL {
                assert_eq!(
                    table.has_permission_str(role.as_str(), "canDelete", Some(resource.as_str())),
                    table.has_permission(role, Permission::CAN_DELETE, Some(resource)),
                    "{} {}",
                    role,
                    resource
                );
            }
        }
    }

    #[test]
    fn test_unknown_inputs_are_denied_and_reported() {
        let observer = Arc::new(RecordingObserver::default());
        let table = PermissionTable::standard().with_observer(observer.clone());

        assert!(!table.has_permission_str("landlord", "canView", None));
        assert!(!table.has_permission_str("admin", "canFly", None));
        assert!(!table.can_perform_action_str("admin", "archive", "properties"));
        assert!(!table.can_perform_action_str("admin", "delete", "yachts"));
        assert!(table.accessible_tabs_str("landlord").is_empty());

        assert_eq!(
            observer.reports(),
            vec![
                "unknown role 'landlord'",
                "unknown permission 'canFly'",
                "unknown action 'archive'",
                "unknown resource 'yachts'",
                "unknown role 'landlord'",
            ]
        );
    }

    #[test]
    fn test_badge_fallbacks() {
        assert_eq!(role_display_name("developer"), "Property Developer");
        assert_eq!(role_color("admin"), "red");
        assert_eq!(role_color("ADMIN"), "gray");
        assert_eq!(role_display_name(""), "Unknown Role");
        assert_eq!(role_color("broker"), "gray");
    }

    // ==================== Gates and navigation ====================

    #[test]
    fn test_gates_for_missing_session() {
        let table = PermissionTable::standard();

        let gate = table.view_gate(None, Permission::CAN_VIEW, Some(Resource::Properties), || 1);
        assert_eq!(gate, ViewGate::Denied);
        assert_eq!(gate.unwrap_or_else(|| 0), 0);

        let trigger = table.action_gate(None, Action::Create, Resource::Properties, || "New");
        assert!(trigger.is_none());
    }

    #[test]
    fn test_gates_render_for_granted_roles() {
        let table = PermissionTable::standard();

        let region = table.view_gate(
            Some(Role::Developer),
            Permission::Capability(Capability::ViewAnalytics),
            None,
            || "charts",
        );
        assert_eq!(region.into_option(), Some("charts"));

        let trigger = table.action_gate(Some(Role::Admin), Action::Approve, Resource::Agents, || {
            "Approve"
        });
        assert_eq!(trigger, Some("Approve"));
    }

    #[test]
    fn test_navigation_per_role() {
        let table = PermissionTable::standard();

        let labels = |role: Role| -> Vec<&str> {
            build_navigation(&table, role).iter().map(|e| e.label).collect()
        };
        assert_eq!(labels(Role::Seller), vec!["Properties", "Inquiries", "Media Library"]);
        assert_eq!(
            labels(Role::Developer),
            vec![
                "Properties",
                "Projects",
                "Units",
                "Inquiries",
                "Events",
                "Media Library",
                "Agents",
                "Analytics"
            ]
        );
        assert_eq!(build_navigation(&table, Role::Admin).len(), MASTER_NAVIGATION.len());
        assert!(build_navigation_str(&table, "tenant").is_empty());
    }
}

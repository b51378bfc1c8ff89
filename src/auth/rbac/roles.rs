//! Role metadata and the hand-specified permission records

use std::collections::BTreeSet;

use super::types::{Resource, Role, RoleInfo, RolePermissions};

/// Fallback label for a role string the session provider sent but we do not know
pub const UNKNOWN_ROLE_NAME: &str = "Unknown Role";
/// Fallback color token for an unknown role
pub const UNKNOWN_ROLE_COLOR: &str = "gray";

impl Role {
    /// Human label shown in the dashboard header
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Agent => "Real Estate Agent",
            Role::Developer => "Property Developer",
            Role::Seller => "Property Seller",
            Role::Admin => "Administrator",
        }
    }

    /// UI color token for the role badge
    pub fn color(&self) -> &'static str {
        match self {
            Role::Agent => "blue",
            Role::Developer => "purple",
            Role::Seller => "green",
            Role::Admin => "red",
        }
    }

    pub fn info(&self) -> RoleInfo {
        RoleInfo {
            role: *self,
            display_name: self.display_name(),
            color: self.color(),
        }
    }

    /// Default permission record for the role
    pub fn default_permissions(&self) -> RolePermissions {
        match self {
            Role::Agent => agent_permissions(),
            Role::Developer => developer_permissions(),
            Role::Seller => seller_permissions(),
            Role::Admin => admin_permissions(),
        }
    }
}

fn set(resources: &[Resource]) -> BTreeSet<Resource> {
    resources.iter().copied().collect()
}

fn agent_permissions() -> RolePermissions {
    use Resource::*;

    RolePermissions {
        can_view: set(&[Properties, Events, Media, Inquiries]),
        can_create: set(&[Properties, Media]),
        can_edit: set(&[Properties, Media]),
        can_delete: set(&[Properties, Media]),
        can_approve: BTreeSet::new(),
        can_upload_media: true,
        ..RolePermissions::default()
    }
}

fn seller_permissions() -> RolePermissions {
    use Resource::*;

    RolePermissions {
        can_view: set(&[Properties, Media, Inquiries]),
        can_create: set(&[Properties, Media]),
        can_edit: set(&[Properties, Media]),
        can_delete: set(&[Properties, Media]),
        can_approve: BTreeSet::new(),
        can_upload_media: true,
        ..RolePermissions::default()
    }
}

fn developer_permissions() -> RolePermissions {
    use Resource::*;

    RolePermissions {
        can_view: set(&[
            Properties, Projects, Units, Events, Media, Inquiries, Agents, Analytics,
        ]),
        can_create: set(&[Properties, Projects, Units, Events, Media]),
        can_edit: set(&[Properties, Projects, Units, Events, Media]),
        can_delete: set(&[Projects, Units, Media]),
        can_approve: set(&[Units]),
        can_view_analytics: true,
        can_upload_media: true,
        can_view_all_properties: true,
        can_manage_events: true,
        ..RolePermissions::default()
    }
}

fn admin_permissions() -> RolePermissions {
    use Resource::*;

    let everything = set(&Resource::ALL);
    RolePermissions {
        can_view: everything.clone(),
        can_create: everything.clone(),
        can_edit: everything.clone(),
        can_delete: everything,
        can_approve: set(&[Properties, Projects, Units, Events, Agents, Users, Content]),
        can_manage_users: true,
        can_view_analytics: true,
        can_manage_settings: true,
        can_upload_media: true,
        can_view_all_properties: true,
        can_view_all_users: true,
        can_view_financial_data: true,
        can_manage_events: true,
        can_manage_content: true,
    }
}

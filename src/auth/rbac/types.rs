//! RBAC type definitions

use crate::utils::error::MarketError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Dashboard role attached to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
    Developer,
    Seller,
    Admin,
}

impl Role {
    /// Every registered role, in table order
    pub const ALL: [Role; 4] = [Role::Agent, Role::Developer, Role::Seller, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Agent => "agent",
            Role::Developer => "developer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }

    /// Slot of this role in the permission table
    pub(crate) fn index(self) -> usize {
        match self {
            Role::Agent => 0,
            Role::Developer => 1,
            Role::Seller => 2,
            Role::Admin => 3,
        }
    }

    /// Parse the opaque role string handed over by the session provider
    ///
    /// Only the exact registry keys match; anything else is an unknown role.
    pub fn parse(value: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| MarketError::bad_request(format!("Unknown role: {}", s)))
    }
}

/// Category of domain object gated by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Properties,
    Projects,
    Units,
    Events,
    Media,
    Users,
    Agents,
    Inquiries,
    Analytics,
    Content,
    Settings,
}

impl Resource {
    pub const ALL: [Resource; 11] = [
        Resource::Properties,
        Resource::Projects,
        Resource::Units,
        Resource::Events,
        Resource::Media,
        Resource::Users,
        Resource::Agents,
        Resource::Inquiries,
        Resource::Analytics,
        Resource::Content,
        Resource::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Properties => "properties",
            Resource::Projects => "projects",
            Resource::Units => "units",
            Resource::Events => "events",
            Resource::Media => "media",
            Resource::Users => "users",
            Resource::Agents => "agents",
            Resource::Inquiries => "inquiries",
            Resource::Analytics => "analytics",
            Resource::Content => "content",
            Resource::Settings => "settings",
        }
    }

    /// Resource names are matched exactly, the way they appear in the table
    pub fn parse(value: &str) -> Option<Self> {
        Resource::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::parse(s).ok_or_else(|| MarketError::bad_request(format!("Unknown resource: {}", s)))
    }
}

/// Resource-scoped action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Approve,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Approve,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Approve => "approve",
        }
    }

    /// Actions that trigger a change, i.e. the ones rendered as buttons
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Action::View)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Action::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-level boolean permission not tied to a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    #[serde(rename = "canManageUsers")]
    ManageUsers,
    #[serde(rename = "canViewAnalytics")]
    ViewAnalytics,
    #[serde(rename = "canManageSettings")]
    ManageSettings,
    #[serde(rename = "canUploadMedia")]
    UploadMedia,
    #[serde(rename = "canViewAllProperties")]
    ViewAllProperties,
    #[serde(rename = "canViewAllUsers")]
    ViewAllUsers,
    #[serde(rename = "canViewFinancialData")]
    ViewFinancialData,
    #[serde(rename = "canManageEvents")]
    ManageEvents,
    #[serde(rename = "canManageContent")]
    ManageContent,
}

impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::ManageUsers,
        Capability::ViewAnalytics,
        Capability::ManageSettings,
        Capability::UploadMedia,
        Capability::ViewAllProperties,
        Capability::ViewAllUsers,
        Capability::ViewFinancialData,
        Capability::ManageEvents,
        Capability::ManageContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ManageUsers => "canManageUsers",
            Capability::ViewAnalytics => "canViewAnalytics",
            Capability::ManageSettings => "canManageSettings",
            Capability::UploadMedia => "canUploadMedia",
            Capability::ViewAllProperties => "canViewAllProperties",
            Capability::ViewAllUsers => "canViewAllUsers",
            Capability::ViewFinancialData => "canViewFinancialData",
            Capability::ManageEvents => "canManageEvents",
            Capability::ManageContent => "canManageContent",
        }
    }
}

/// Discriminator of a permission query: one of the `RolePermissions` fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// One of the resource sets (`canView` .. `canApprove`)
    Action(Action),
    /// One of the boolean flags
    Capability(Capability),
}

impl Permission {
    pub const CAN_VIEW: Permission = Permission::Action(Action::View);
    pub const CAN_CREATE: Permission = Permission::Action(Action::Create);
    pub const CAN_EDIT: Permission = Permission::Action(Action::Edit);
    pub const CAN_DELETE: Permission = Permission::Action(Action::Delete);
    pub const CAN_APPROVE: Permission = Permission::Action(Action::Approve);

    /// Field name of this permission in `RolePermissions`
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Action(Action::View) => "canView",
            Permission::Action(Action::Create) => "canCreate",
            Permission::Action(Action::Edit) => "canEdit",
            Permission::Action(Action::Delete) => "canDelete",
            Permission::Action(Action::Approve) => "canApprove",
            Permission::Capability(capability) => capability.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Action::ALL
            .into_iter()
            .map(Permission::Action)
            .chain(Capability::ALL.into_iter().map(Permission::Capability))
            .find(|p| p.as_str() == value)
    }
}

impl From<Action> for Permission {
    fn from(action: Action) -> Self {
        Permission::Action(action)
    }
}

impl From<Capability> for Permission {
    fn from(capability: Capability) -> Self {
        Permission::Capability(capability)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s)
            .ok_or_else(|| MarketError::bad_request(format!("Unknown permission: {}", s)))
    }
}

/// Complete permission record of one role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissions {
    /// Resources the role may view (dashboard tabs)
    pub can_view: BTreeSet<Resource>,
    pub can_create: BTreeSet<Resource>,
    pub can_edit: BTreeSet<Resource>,
    pub can_delete: BTreeSet<Resource>,
    pub can_approve: BTreeSet<Resource>,
    pub can_manage_users: bool,
    pub can_view_analytics: bool,
    pub can_manage_settings: bool,
    pub can_upload_media: bool,
    pub can_view_all_properties: bool,
    pub can_view_all_users: bool,
    pub can_view_financial_data: bool,
    pub can_manage_events: bool,
    pub can_manage_content: bool,
}

impl RolePermissions {
    /// Resource set backing an action
    pub fn resources(&self, action: Action) -> &BTreeSet<Resource> {
        match action {
            Action::View => &self.can_view,
            Action::Create => &self.can_create,
            Action::Edit => &self.can_edit,
            Action::Delete => &self.can_delete,
            Action::Approve => &self.can_approve,
        }
    }

    pub fn allows(&self, action: Action, resource: Resource) -> bool {
        self.resources(action).contains(&resource)
    }

    pub fn capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageUsers => self.can_manage_users,
            Capability::ViewAnalytics => self.can_view_analytics,
            Capability::ManageSettings => self.can_manage_settings,
            Capability::UploadMedia => self.can_upload_media,
            Capability::ViewAllProperties => self.can_view_all_properties,
            Capability::ViewAllUsers => self.can_view_all_users,
            Capability::ViewFinancialData => self.can_view_financial_data,
            Capability::ManageEvents => self.can_manage_events,
            Capability::ManageContent => self.can_manage_content,
        }
    }
}

/// Display metadata of a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub role: Role,
    pub display_name: &'static str,
    pub color: &'static str,
}

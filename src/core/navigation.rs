//! Dashboard navigation
//!
//! The master list holds one entry per resource in display order; a role sees
//! the entries whose resource it may view.

use serde::Serialize;

use crate::auth::rbac::{PermissionTable, Resource, Role};

/// Dashboard navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub tab: Resource,
    pub label: &'static str,
    pub path: &'static str,
}

const fn entry(tab: Resource, label: &'static str, path: &'static str) -> NavEntry {
    NavEntry { tab, label, path }
}

/// Every dashboard entry in display order
pub const MASTER_NAVIGATION: [NavEntry; 11] = [
    entry(Resource::Properties, "Properties", "/dashboard/properties"),
    entry(Resource::Projects, "Projects", "/dashboard/projects"),
    entry(Resource::Units, "Units", "/dashboard/units"),
    entry(Resource::Inquiries, "Inquiries", "/dashboard/inquiries"),
    entry(Resource::Events, "Events", "/dashboard/events"),
    entry(Resource::Media, "Media Library", "/dashboard/media"),
    entry(Resource::Agents, "Agents", "/dashboard/agents"),
    entry(Resource::Users, "Users", "/dashboard/users"),
    entry(Resource::Content, "Content", "/dashboard/content"),
    entry(Resource::Analytics, "Analytics", "/dashboard/analytics"),
    entry(Resource::Settings, "Settings", "/dashboard/settings"),
];

/// Entries visible to `role`, in master order
pub fn build_navigation(table: &PermissionTable, role: Role) -> Vec<NavEntry> {
    let tabs = table.accessible_tabs(role);
    MASTER_NAVIGATION
        .iter()
        .filter(|entry| tabs.contains(&entry.tab))
        .copied()
        .collect()
}

/// Entries visible to an opaque session role; nothing for an unknown role
pub fn build_navigation_str(table: &PermissionTable, role: &str) -> Vec<NavEntry> {
    let tabs = table.accessible_tabs_str(role);
    MASTER_NAVIGATION
        .iter()
        .filter(|entry| tabs.contains(&entry.tab))
        .copied()
        .collect()
}

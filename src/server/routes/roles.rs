//! Role, permission and navigation endpoints
//!
//! Read-only views over the permission table for the dashboard front end.

use crate::auth::rbac::{Resource, Role, RoleInfo, role_color, role_display_name};
use crate::core::navigation::{NavEntry, build_navigation_str};
use crate::server::routes::ApiResponse;
use crate::server::session::Session;
use crate::server::state::AppState;
use crate::utils::error::{MarketError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configure role routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/roles", web::get().to(list_roles))
        .route("/roles/{role}/permissions", web::get().to(role_permissions))
        .route("/permissions/check", web::get().to(check_permission))
        .route("/navigation", web::get().to(navigation))
        .route("/session", web::get().to(session_info));
}

/// All roles with display metadata
async fn list_roles() -> HttpResponse {
    let roles: Vec<RoleInfo> = Role::ALL.iter().map(Role::info).collect();
    ApiResponse::ok(roles)
}

/// Full permission record of a role
async fn role_permissions(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let role = path.into_inner();
    let record = state
        .permissions
        .lookup(&role)
        .ok_or_else(|| MarketError::not_found(format!("Unknown role: {}", role)))?;

    Ok(ApiResponse::ok(record))
}

/// Query parameters of a permission check
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub role: String,
    pub permission: String,
    pub resource: Option<String>,
}

/// Answer of a permission check
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub role: String,
    pub permission: String,
    pub resource: Option<String>,
    pub granted: bool,
}

/// `has_permission` over the string boundary; unknown input is denied
async fn check_permission(
    state: web::Data<AppState>,
    query: web::Query<CheckQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    let granted = state.permissions.has_permission_str(
        &query.role,
        &query.permission,
        query.resource.as_deref(),
    );
    debug!(
        "Permission check {} {} {:?} -> {}",
        query.role, query.permission, query.resource, granted
    );

    ApiResponse::ok(CheckResult {
        role: query.role,
        permission: query.permission,
        resource: query.resource,
        granted,
    })
}

/// Dashboard entries of the session role
async fn navigation(state: web::Data<AppState>, session: Session) -> HttpResponse {
    let entries: Vec<NavEntry> = match session.raw_role.as_deref() {
        Some(role) => build_navigation_str(&state.permissions, role),
        None => Vec::new(),
    };
    ApiResponse::ok(entries)
}

/// Header badge data for the current session
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionInfo {
    pub role: Option<String>,
    pub display_name: String,
    pub color: String,
    pub tabs: Vec<Resource>,
}

async fn session_info(state: web::Data<AppState>, session: Session) -> HttpResponse {
    let raw = session.raw_role.as_deref().unwrap_or_default();
    let tabs: Vec<Resource> = session
        .role
        .map(|role| state.permissions.accessible_tabs(role).iter().copied().collect())
        .unwrap_or_default();

    ApiResponse::ok(SessionInfo {
        role: session.role.map(|role| role.as_str().to_string()),
        display_name: role_display_name(raw).to_string(),
        color: role_color(raw).to_string(),
        tabs,
    })
}

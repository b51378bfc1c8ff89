//! Listing endpoints
//!
//! Reads are open; unmoderated listings are only visible to roles holding
//! `canViewAllProperties` and to their owner. Mutations are gated per action
//! on the properties resource; edits and deletes are further limited to the
//! owner unless the role holds `canViewAllProperties`.

use crate::auth::rbac::{Action, Capability, Permission, Resource, Role};
use crate::core::listings::{
    ApprovalState, Listing, ListingFilter, ListingQuery, ListingSort, ListingStatus, ListingType,
    ListingUpdate, NewListing, PropertyType,
};
use crate::core::types::PageRequest;
use crate::server::routes::ApiResponse;
use crate::server::session::Session;
use crate::server::state::AppState;
use crate::utils::error::{MarketError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

/// Configure listing routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/listings")
            .route("", web::get().to(search_listings))
            .route("", web::post().to(create_listing))
            .route("/{id}", web::get().to(get_listing))
            .route("/{id}", web::put().to(update_listing))
            .route("/{id}", web::delete().to(delete_listing))
            .route("/{id}/approve", web::post().to(approve_listing))
            .route("/{id}/reject", web::post().to(reject_listing)),
    );
}

/// Flat query string of a listing search
#[derive(Debug, Default, Deserialize)]
pub struct ListingSearchParams {
    pub search: Option<String>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub status: Option<ListingStatus>,
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    #[serde(default)]
    pub featured: bool,
    pub sort: Option<ListingSort>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListingSearchParams {
    /// Build a query, filling page defaults from config
    pub fn into_query(self, default_limit: u32, max_limit: u32) -> Result<ListingQuery> {
        let page = PageRequest::new(self.page.unwrap_or(1), self.limit.unwrap_or(default_limit));
        page.validate(max_limit)?;

        Ok(ListingQuery {
            filter: ListingFilter {
                search: self.search,
                property_type: self.property_type,
                listing_type: self.listing_type,
                status: self.status,
                city: self.city,
                min_price: self.min_price,
                max_price: self.max_price,
                min_bedrooms: self.min_bedrooms,
                min_bathrooms: self.min_bathrooms,
                min_area: self.min_area,
                max_area: self.max_area,
                featured_only: self.featured,
                approved_only: false,
            },
            sort: self.sort.unwrap_or_default(),
            page,
        })
    }
}

fn sees_all_listings(state: &AppState, session: &Session) -> bool {
    session.role.is_some_and(|role| {
        state.permissions.has_permission(
            role,
            Permission::Capability(Capability::ViewAllProperties),
            None,
        )
    })
}

fn is_owner(session: &Session, listing: &Listing) -> bool {
    matches!(
        (&session.user_id, &listing.owner_id),
        (Some(user), Some(owner)) if user == owner
    )
}

/// Gate an edit or delete of one listing: role permission first, then ownership
fn require_listing_action(
    state: &AppState,
    session: &Session,
    action: Action,
    id: Uuid,
) -> Result<Role> {
    let role = state
        .permissions
        .require_action(session.role, action, Resource::Properties)?;
    let listing = state.catalog.get(id)?;

    if sees_all_listings(state, session) || is_owner(session, &listing) {
        Ok(role)
    } else {
        Err(MarketError::forbidden(format!(
            "Role '{}' cannot {} listing {} owned by another user",
            role, action, id
        )))
    }
}

fn parse_id(raw: &str) -> Result<Uuid> {
    raw.parse()
        .map_err(|_| MarketError::bad_request(format!("Invalid listing id: {}", raw)))
}

async fn search_listings(
    state: web::Data<AppState>,
    session: Session,
    params: web::Query<ListingSearchParams>,
) -> Result<HttpResponse> {
    let limits = state.config.listings();
    let mut query = params
        .into_inner()
        .into_query(limits.default_page_size, limits.max_page_size)?;
    query.filter.approved_only = !sees_all_listings(&state, &session);

    Ok(ApiResponse::ok(state.catalog.search(&query)))
}

async fn get_listing(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    let listing = state.catalog.get(id)?;

    if !listing.is_approved() && !sees_all_listings(&state, &session) && !is_owner(&session, &listing)
    {
        return Err(MarketError::not_found(format!("Listing not found: {}", id)));
    }
    Ok(ApiResponse::ok(listing))
}

async fn create_listing(
    state: web::Data<AppState>,
    session: Session,
    body: web::Json<NewListing>,
) -> Result<HttpResponse> {
    let role = state
        .permissions
        .require_action(session.role, Action::Create, Resource::Properties)?;

    let listing = state.catalog.create(body.into_inner(), session.user_id)?;
    info!("Role {} created listing {}", role, listing.id);
    Ok(ApiResponse::created(listing))
}

async fn update_listing(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<ListingUpdate>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    require_listing_action(&state, &session, Action::Edit, id)?;

    Ok(ApiResponse::ok(state.catalog.update(id, body.into_inner())?))
}

async fn delete_listing(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    let role = require_listing_action(&state, &session, Action::Delete, id)?;

    state.catalog.delete(id)?;
    info!("Role {} deleted listing {}", role, id);
    Ok(HttpResponse::NoContent().finish())
}

async fn moderate(
    state: web::Data<AppState>,
    session: Session,
    raw_id: &str,
    decision: ApprovalState,
) -> Result<HttpResponse> {
    let role = state
        .permissions
        .require_action(session.role, Action::Approve, Resource::Properties)?;
    let id = parse_id(raw_id)?;

    let listing = state.catalog.set_approval(id, decision)?;
    info!("Role {} set listing {} to {:?}", role, id, decision);
    Ok(ApiResponse::ok(listing))
}

async fn approve_listing(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    moderate(state, session, &path, ApprovalState::Approved).await
}

async fn reject_listing(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    moderate(state, session, &path, ApprovalState::Rejected).await
}

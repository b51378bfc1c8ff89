//! Session extraction
//!
//! The upstream auth layer forwards the user's role (and optionally id) as
//! request headers. The role is trusted as-is and parsed once here.

use crate::auth::rbac::Role;
use crate::config::default_role_header;
use crate::server::state::AppState;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{Ready, ready};

/// Header carrying the session user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity as forwarded by the auth layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Role string exactly as received
    pub raw_role: Option<String>,
    /// Parsed role; `None` when missing or unrecognized
    pub role: Option<Role>,
    /// Session user id
    pub user_id: Option<String>,
}

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>();
        let header = state
            .map(|state| state.config.rbac().role_header.clone())
            .unwrap_or_else(default_role_header);

        let raw_role = header_value(req, &header);
        let role = match (&raw_role, state) {
            (Some(raw), Some(state)) => state.permissions.resolve_role(raw),
            (Some(raw), None) => Role::parse(raw),
            (None, _) => None,
        };

        ready(Ok(Session {
            raw_role,
            role,
            user_id: header_value(req, USER_ID_HEADER),
        }))
    }
}

//! Diagnostics hook for denied queries
//!
//! Queries fail closed on inputs they do not recognize. An observer lets the
//! host surface those denials without changing any decision.

use tracing::warn;

use super::types::{Permission, Role};

/// Input a permission query could not match against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unrecognized<'a> {
    Role(&'a str),
    Permission(&'a str),
    Action(&'a str),
    Resource(&'a str),
    /// A resource-scoped permission was queried without a resource
    MissingResource { role: Role, permission: Permission },
}

impl std::fmt::Display for Unrecognized<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unrecognized::Role(value) => write!(f, "unknown role '{}'", value),
            Unrecognized::Permission(value) => write!(f, "unknown permission '{}'", value),
            Unrecognized::Action(value) => write!(f, "unknown action '{}'", value),
            Unrecognized::Resource(value) => write!(f, "unknown resource '{}'", value),
            Unrecognized::MissingResource { role, permission } => write!(
                f,
                "'{}' queried for role '{}' without a resource",
                permission, role
            ),
        }
    }
}

/// Receives every fail-closed denial caused by unrecognized input
pub trait AccessObserver: Send + Sync {
    fn on_unrecognized(&self, input: &Unrecognized<'_>);
}

/// Observer that reports misconfiguration through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AccessObserver for TracingObserver {
    fn on_unrecognized(&self, input: &Unrecognized<'_>) {
        warn!(target: "estate_hub::rbac", "Permission denied on unrecognized input: {}", input);
    }
}

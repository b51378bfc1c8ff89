//! Role-Based Access Control (RBAC) for the marketplace dashboard
//!
//! A fixed set of roles maps onto an immutable permission table. All queries
//! are pure lookups and deny anything they do not recognize.

mod observer;
mod permissions;
mod roles;
mod system;
mod types;
mod untyped;

pub use observer::{AccessObserver, TracingObserver, Unrecognized};
pub use roles::{UNKNOWN_ROLE_COLOR, UNKNOWN_ROLE_NAME};
pub use system::PermissionTable;
pub use types::{Action, Capability, Permission, Resource, Role, RoleInfo, RolePermissions};
pub use untyped::{role_color, role_display_name};

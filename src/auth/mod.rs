//! Authorization for the marketplace dashboard
//!
//! Authentication happens upstream; this module only decides what an
//! already-identified role may see and do.

pub mod guard;
pub mod rbac;

pub use guard::ViewGate;
pub use rbac::{Action, Capability, Permission, PermissionTable, Resource, Role, RolePermissions};

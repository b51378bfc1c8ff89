//! Authorization configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Authorization configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl AuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        self.rbac = self.rbac.merge(other.rbac);
        self
    }
}

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Report queries denied on unrecognized input
    #[serde(default)]
    pub diagnostics: bool,
    /// Header carrying the session role
    #[serde(default = "default_role_header")]
    pub role_header: String,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            diagnostics: false,
            role_header: default_role_header(),
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.diagnostics {
            self.diagnostics = other.diagnostics;
        }
        if other.role_header != default_role_header() {
            self.role_header = other.role_header;
        }
        self
    }
}

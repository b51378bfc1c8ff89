//! Configuration data models
//!
//! This module defines all configuration structures used by the marketplace.

#![allow(missing_docs)]

pub mod auth;
pub mod listings;
pub mod logging;
pub mod market;
pub mod server;

pub use auth::*;
pub use listings::*;
pub use logging::*;
pub use market::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_role_header() -> String {
    "x-user-role".to_string()
}

pub fn default_page_size() -> u32 {
    12
}

pub fn default_max_page_size() -> u32 {
    100
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}

//! Utility modules for the marketplace backend
//!
//! - **error**: error type, helper constructors and HTTP mapping
//! - **logging**: tracing subscriber initialisation

pub mod error;
pub mod logging;

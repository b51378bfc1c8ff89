//! Services module
//!
//! This module contains business logic and service implementations

pub mod catalog;

pub use catalog::ListingCatalog;

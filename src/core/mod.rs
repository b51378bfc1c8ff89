//! Core marketplace domain: listings, navigation and shared types

pub mod listings;
pub mod navigation;
pub mod types;

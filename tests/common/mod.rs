//! Common test utilities for estate-hub
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::ListingFactory;
//!
//! let catalog = ListingFactory::catalog();
//! ```

pub mod assertions;
pub mod fixtures;

pub use fixtures::{ListingFactory, RecordingObserver};

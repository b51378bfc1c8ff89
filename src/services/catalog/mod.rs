//! In-memory listing catalog
//!
//! Holds every listing behind one lock; searches take a read lock and run the
//! pure listing query over the current snapshot.

mod loader;
mod service;

pub use service::ListingCatalog;

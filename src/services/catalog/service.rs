//! Main catalog implementation

use crate::core::listings::{ApprovalState, Listing, ListingQuery, ListingUpdate, NewListing};
use crate::core::types::Page;
use crate::utils::error::{MarketError, Result};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Listing store shared across request handlers
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    pub(super) listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl ListingCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `listings`; ids must be unique
    pub fn with_listings<I>(listings: I) -> Result<Self>
    where
        I: IntoIterator<Item = Listing>,
    {
        let mut map = HashMap::new();
        for listing in listings {
            let id = listing.id;
            if map.insert(id, listing).is_some() {
                return Err(MarketError::conflict(format!("Duplicate listing id: {}", id)));
            }
        }

        info!("Listing catalog initialized with {} listings", map.len());
        Ok(Self {
            listings: Arc::new(RwLock::new(map)),
        })
    }

    pub fn len(&self) -> usize {
        self.listings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.read().is_empty()
    }

    /// Run a query over the current listings
    pub fn search(&self, query: &ListingQuery) -> Page<Listing> {
        let listings = self.listings.read();
        let page = query.apply(listings.values());
        debug!(
            "Listing search matched {} listings, returning {}",
            page.pagination.total,
            page.items.len()
        );
        page
    }

    /// Get a listing by id
    pub fn get(&self, id: Uuid) -> Result<Listing> {
        self.listings
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| MarketError::not_found(format!("Listing not found: {}", id)))
    }

    /// Create a listing awaiting approval
    pub fn create(&self, input: NewListing, owner_id: Option<String>) -> Result<Listing> {
        input.validate()?;

        let listing = input.into_listing(owner_id, Utc::now());
        self.listings.write().insert(listing.id, listing.clone());

        info!("Created listing {}", listing.id);
        Ok(listing)
    }

    /// Apply a partial update
    pub fn update(&self, id: Uuid, update: ListingUpdate) -> Result<Listing> {
        update.validate()?;

        let mut listings = self.listings.write();
        let listing = listings
            .get_mut(&id)
            .ok_or_else(|| MarketError::not_found(format!("Listing not found: {}", id)))?;
        update.apply(listing, Utc::now());

        debug!("Updated listing {}", id);
        Ok(listing.clone())
    }

    /// Remove a listing
    pub fn delete(&self, id: Uuid) -> Result<Listing> {
        let removed = self
            .listings
            .write()
            .remove(&id)
            .ok_or_else(|| MarketError::not_found(format!("Listing not found: {}", id)))?;

        info!("Deleted listing {}", id);
        Ok(removed)
    }

    /// Record a moderation decision
    pub fn set_approval(&self, id: Uuid, approval: ApprovalState) -> Result<Listing> {
        let mut listings = self.listings.write();
        let listing = listings
            .get_mut(&id)
            .ok_or_else(|| MarketError::not_found(format!("Listing not found: {}", id)))?;

        if listing.approval == approval {
            return Err(MarketError::conflict(format!(
                "Listing {} is already {:?}",
                id, approval
            )));
        }
        listing.approval = approval;
        listing.updated_at = Utc::now();

        info!("Listing {} moderation set to {:?}", id, approval);
        Ok(listing.clone())
    }
}

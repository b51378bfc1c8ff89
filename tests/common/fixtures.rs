//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use chrono::{DateTime, Duration, TimeZone, Utc};
use estate_hub::core::listings::{
    ApprovalState, Listing, ListingStatus, ListingType, NewListing, PropertyType,
};
use estate_hub::{AccessObserver, ListingCatalog, Unrecognized};
use parking_lot::Mutex;
use uuid::Uuid;

/// Factory for creating test listings
pub struct ListingFactory;

impl ListingFactory {
    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    /// Approved apartment for sale in Cairo
    pub fn create(title: &str) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            property_type: PropertyType::Apartment,
            listing_type: ListingType::Sale,
            status: ListingStatus::Available,
            approval: ApprovalState::Approved,
            price: 200_000.0,
            bedrooms: 2,
            bathrooms: 1,
            area: 110.0,
            city: "Cairo".to_string(),
            address: String::new(),
            featured: false,
            owner_id: None,
            created_at: Self::epoch(),
            updated_at: Self::epoch(),
        }
    }

    /// Listing created `days` after the fixture epoch
    pub fn created_after(title: &str, days: i64) -> Listing {
        let mut listing = Self::create(title);
        listing.created_at = Self::epoch() + Duration::days(days);
        listing.updated_at = listing.created_at;
        listing
    }

    /// Create payload with valid defaults
    pub fn new_listing(title: &str) -> NewListing {
        NewListing {
            title: title.to_string(),
            description: "Freshly renovated".to_string(),
            property_type: PropertyType::Townhouse,
            listing_type: ListingType::Sale,
            price: 350_000.0,
            bedrooms: 3,
            bathrooms: 2,
            area: 210.0,
            city: "New Cairo".to_string(),
            address: "Fifth Settlement".to_string(),
            featured: false,
        }
    }

    /// The listings behind [`ListingFactory::catalog`]
    ///
    /// Six listings: five approved across three cities, one pending villa.
    pub fn listings() -> Vec<Listing> {
        let mut a = Self::created_after("Garden City Flat", 0);
        a.price = 180_000.0;

        let mut b = Self::created_after("Maadi Duplex", 1);
        b.price = 420_000.0;
        b.bedrooms = 4;
        b.featured = true;

        let mut c = Self::created_after("Sheikh Zayed Villa", 2);
        c.property_type = PropertyType::Villa;
        c.city = "Giza".to_string();
        c.price = 950_000.0;
        c.bedrooms = 5;
        c.area = 400.0;

        let mut d = Self::created_after("Dokki Studio", 3);
        d.listing_type = ListingType::Rent;
        d.city = "Giza".to_string();
        d.price = 900.0;
        d.bedrooms = 0;
        d.area = 45.0;

        let mut e = Self::created_after("Stanley Sea View", 4);
        e.city = "Alexandria".to_string();
        e.description = "Balcony facing the Mediterranean".to_string();
        e.price = 260_000.0;
        e.bedrooms = 3;

        let mut f = Self::created_after("Unreviewed Villa", 5);
        f.approval = ApprovalState::Pending;
        f.property_type = PropertyType::Villa;
        f.owner_id = Some("seller-42".to_string());

        vec![a, b, c, d, e, f]
    }

    pub fn catalog() -> ListingCatalog {
        ListingCatalog::with_listings(Self::listings()).unwrap()
    }
}

/// Observer that keeps every report as text
#[derive(Default)]
pub struct RecordingObserver {
    reports: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }
}

impl AccessObserver for RecordingObserver {
    fn on_unrecognized(&self, input: &Unrecognized<'_>) {
        self.reports.lock().push(input.to_string());
    }
}

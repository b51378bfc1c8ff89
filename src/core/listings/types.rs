//! Listing data model

use crate::utils::error::{MarketError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of property on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    Villa,
    House,
    Townhouse,
    Land,
    Commercial,
    Office,
}

/// Whether the property is sold or rented out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Sale,
    Rent,
}

/// Market status of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Available,
    Pending,
    Sold,
    Rented,
}

/// Moderation state of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub approval: ApprovalState,
    /// Asking price (sale) or monthly rent
    pub price: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    /// Floor or plot area in square metres
    #[serde(default)]
    pub area: f64,
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub featured: bool,
    /// Session user that created the listing
    #[serde(default)]
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    pub fn is_approved(&self) -> bool {
        self.approval == ApprovalState::Approved
    }
}

/// Payload for creating a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub price: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub area: f64,
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub featured: bool,
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(MarketError::validation("Price must be a positive number"));
    }
    Ok(())
}

fn validate_area(area: f64) -> Result<()> {
    if !area.is_finite() || area < 0.0 {
        return Err(MarketError::validation("Area cannot be negative"));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MarketError::validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

impl NewListing {
    pub fn validate(&self) -> Result<()> {
        validate_text("Title", &self.title)?;
        validate_text("City", &self.city)?;
        validate_price(self.price)?;
        validate_area(self.area)
    }

    /// Build a pending listing owned by `owner_id`
    pub fn into_listing(self, owner_id: Option<String>, now: DateTime<Utc>) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: self.description,
            property_type: self.property_type,
            listing_type: self.listing_type,
            status: ListingStatus::Available,
            approval: ApprovalState::Pending,
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            city: self.city.trim().to_string(),
            address: self.address,
            featured: self.featured,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub status: Option<ListingStatus>,
    pub price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub featured: Option<bool>,
}

impl ListingUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_text("Title", title)?;
        }
        if let Some(city) = &self.city {
            validate_text("City", city)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(area) = self.area {
            validate_area(area)?;
        }
        Ok(())
    }

    /// Apply the set fields to `listing`
    pub fn apply(self, listing: &mut Listing, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            listing.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            listing.description = description;
        }
        if let Some(property_type) = self.property_type {
            listing.property_type = property_type;
        }
        if let Some(listing_type) = self.listing_type {
            listing.listing_type = listing_type;
        }
        if let Some(status) = self.status {
            listing.status = status;
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(bedrooms) = self.bedrooms {
            listing.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            listing.bathrooms = bathrooms;
        }
        if let Some(area) = self.area {
            listing.area = area;
        }
        if let Some(city) = self.city {
            listing.city = city.trim().to_string();
        }
        if let Some(address) = self.address {
            listing.address = address;
        }
        if let Some(featured) = self.featured {
            listing.featured = featured;
        }
        listing.updated_at = now;
    }
}

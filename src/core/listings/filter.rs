//! Listing filtering and sorting

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::types::{Listing, ListingStatus, ListingType, PropertyType};
use crate::core::types::{Page, PageRequest};

/// Conjunctive listing filter; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Case-insensitive text matched against title, description, city and address
    pub search: Option<String>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub status: Option<ListingStatus>,
    /// Case-insensitive city equality
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    #[serde(default)]
    pub featured_only: bool,
    #[serde(default)]
    pub approved_only: bool,
}

impl ListingFilter {
    /// Whether a listing passes every set criterion
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && self.property_type.is_none_or(|t| listing.property_type == t)
            && self.listing_type.is_none_or(|t| listing.listing_type == t)
            && self.status.is_none_or(|s| listing.status == s)
            && self
                .city
                .as_deref()
                .is_none_or(|city| listing.city.trim().eq_ignore_ascii_case(city.trim()))
            && self.min_price.is_none_or(|min| listing.price >= min)
            && self.max_price.is_none_or(|max| listing.price <= max)
            && self.min_bedrooms.is_none_or(|min| listing.bedrooms >= min)
            && self.min_bathrooms.is_none_or(|min| listing.bathrooms >= min)
            && self.min_area.is_none_or(|min| listing.area >= min)
            && self.max_area.is_none_or(|max| listing.area <= max)
            && (!self.featured_only || listing.featured)
            && (!self.approved_only || listing.is_approved())
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        let Some(term) = self.search.as_deref().map(str::trim) else {
            return true;
        };
        if term.is_empty() {
            return true;
        }

        let term = term.to_lowercase();
        [
            &listing.title,
            &listing.description,
            &listing.city,
            &listing.address,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingSort {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    AreaDesc,
    BedroomsDesc,
}

impl ListingSort {
    /// Total order; ties fall back to the listing id
    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        let primary = match self {
            ListingSort::Newest => b.created_at.cmp(&a.created_at),
            ListingSort::Oldest => a.created_at.cmp(&b.created_at),
            ListingSort::PriceAsc => a.price.total_cmp(&b.price),
            ListingSort::PriceDesc => b.price.total_cmp(&a.price),
            ListingSort::AreaDesc => b.area.total_cmp(&a.area),
            ListingSort::BedroomsDesc => b.bedrooms.cmp(&a.bedrooms),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Filter, sort and page in one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub filter: ListingFilter,
    pub sort: ListingSort,
    pub page: PageRequest,
}

impl ListingQuery {
    /// Run the query over a slice of listings
    pub fn apply<'a, I>(&self, listings: I) -> Page<Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut matched: Vec<&Listing> = listings
            .into_iter()
            .filter(|listing| self.filter.matches(listing))
            .collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));

        let page = Page::from_items(matched, self.page);
        Page {
            items: page.items.into_iter().cloned().collect(),
            pagination: page.pagination,
        }
    }
}

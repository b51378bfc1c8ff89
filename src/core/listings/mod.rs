//! Property listings: data model and search
//!
//! Search is a pure filter, sort and paginate pass over listings held in memory.

mod filter;
mod types;

pub use filter::{ListingFilter, ListingQuery, ListingSort};
pub use types::{
    ApprovalState, Listing, ListingStatus, ListingType, ListingUpdate, NewListing, PropertyType,
};

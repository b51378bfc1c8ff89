//! Shared core types

pub mod pagination;

pub use pagination::{Page, PageRequest, PaginationMeta};

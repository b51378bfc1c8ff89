//! Pagination types

use crate::utils::error::{MarketError, Result};
use serde::{Deserialize, Serialize};

/// Requested page (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (starts from 1)
    pub page: u32,
    /// Page size
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Validate against the largest page size the caller allows
    pub fn validate(&self, max_limit: u32) -> Result<()> {
        if self.page == 0 {
            return Err(MarketError::validation("Page must be greater than 0"));
        }
        if self.limit == 0 {
            return Err(MarketError::validation("Limit must be greater than 0"));
        }
        if self.limit > max_limit {
            return Err(MarketError::validation(format!(
                "Limit cannot exceed {}",
                max_limit
            )));
        }
        Ok(())
    }

    /// Calculate offset
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.limit as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number
    pub page: u32,
    /// Number of items per page
    pub limit: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub pages: u32,
    /// Whether there is a next page
    pub has_next: bool,
    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let pages = if limit == 0 {
            0
        } else {
            u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };

        Self {
            page,
            limit,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    /// Cut one page out of the full, already ordered result set
    pub fn from_items(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len() as u64;
        let items: Vec<T> = items
            .into_iter()
            .skip(request.offset())
            .take(request.limit as usize)
            .collect();

        Self {
            items,
            pagination: PaginationMeta::new(request.page, request.limit, total),
        }
    }
}

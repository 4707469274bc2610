//! Pagination types
//!
//! The list page uses 0-indexed, offset-based pagination: `page * size`
//! slices into the filtered set, and a page past the end is simply empty.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Default items per page
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Validated page request
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// Page number (0-indexed)
    pub page: u32,
    /// Items per page (at least 1)
    pub size: u32,
}

impl PageRequest {
    /// Create a page request.
    ///
    /// `size` must be greater than zero; there is no upper clamp because the
    /// store is a bounded in-memory list.
    pub fn new(page: u32, size: u32) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::InvalidFormat {
                field: "size",
                reason: "must be greater than zero",
            });
        }

        Ok(Self { page, size })
    }

    /// First index of the requested slice.
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Query parameters for the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub search: Option<String>,
}

impl ListParams {
    /// Resolve the pagination half of the query, applying defaults.
    pub fn page_request(&self) -> Result<PageRequest, ValidationError> {
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// One page of results plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items for the requested page
    pub content: Vec<T>,
    /// Page number echoed back (0-indexed)
    pub page: u32,
    /// Total pages for the filtered set; 0 when the set is empty
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Total pages for `total` items at `size` per page.
    pub fn total_pages_for(total: usize, size: u32) -> u32 {
        (total as u32).div_ceil(size)
    }
}

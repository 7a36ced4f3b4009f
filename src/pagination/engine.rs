//! In-memory pagination engine
//!
//! Holds the full record set and a 1-based page cursor. All navigation is
//! clamped to `1..=total_pages()`; out-of-range requests are ignored.

use super::types::{total_pages, PageSize};
use std::ops::RangeInclusive;
use tracing::debug;

/// Owns the fetched records and the current page position
#[derive(Debug, Clone)]
pub struct PaginationEngine<T> {
    records: Vec<T>,
    page_size: PageSize,
    current_page: usize,
    loaded: bool,
}

impl<T> PaginationEngine<T> {
    /// Create an empty engine positioned on page 1
    pub fn new(page_size: PageSize) -> Self {
        Self {
            records: Vec::new(),
            page_size,
            current_page: 1,
            loaded: false,
        }
    }

    /// Replace the record set.
    ///
    /// The first load always starts on page 1. Later loads keep the current
    /// page, pulled back to the last page if the new set is shorter.
    pub fn load(&mut self, records: Vec<T>) {
        self.records = records;
        if self.loaded {
            self.current_page = self.current_page.min(self.total_pages());
        } else {
            self.current_page = 1;
            self.loaded = true;
        }
        debug!(
            records = self.records.len(),
            page = self.current_page,
            total_pages = self.total_pages(),
            "Loaded records into pagination engine"
        );
    }

    /// Whether `load` has been called at least once
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of pages, at least one
    pub fn total_pages(&self) -> usize {
        total_pages(self.records.len(), self.page_size)
    }

    /// Current 1-based page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Configured page size
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Total number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are held
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in source order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Records belonging to the current page
    pub fn visible_slice(&self) -> &[T] {
        self.page_slice(self.current_page)
    }

    /// Records belonging to an arbitrary page; empty when out of range
    pub fn page_slice(&self, page: usize) -> &[T] {
        let size = self.page_size.get();
        let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(size)) else {
            return &[];
        };
        if start >= self.records.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }

    /// Whether `page` is a position navigation may move to
    pub fn is_valid_page(&self, page: usize) -> bool {
        (1..=self.total_pages()).contains(&page)
    }

    /// Whether a following page exists
    pub fn can_go_next(&self) -> bool {
        self.is_valid_page(self.current_page + 1)
    }

    /// Whether a preceding page exists
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1 && self.is_valid_page(self.current_page - 1)
    }

    /// Move to `page`. Out-of-range requests are ignored.
    ///
    /// Returns `true` when the current page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !self.is_valid_page(page) {
            debug!(
                requested = page,
                total_pages = self.total_pages(),
                "Ignoring out-of-range page"
            );
            return false;
        }
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Advance one page if possible
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.go_to_page(self.current_page + 1)
    }

    /// Go back one page if possible
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.go_to_page(self.current_page - 1)
    }

    /// Page numbers for numbered navigation controls
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }
}

impl<T> Default for PaginationEngine<T> {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

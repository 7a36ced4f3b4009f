//! Pagination module
//!
//! Client-side pagination over a record set fetched in full.
//!
//! # Overview
//!
//! The engine owns every record, a fixed page size and a 1-based current
//! page. It derives the page count and the visible window, and clamps all
//! navigation to the first and last page. The same `can_go_next` /
//! `can_go_previous` predicates drive both the clamp and the disabled state
//! of navigation controls.

mod engine;
mod types;

pub use engine::PaginationEngine;
pub use types::{total_pages, PageSize, DEFAULT_PAGE_SIZE};

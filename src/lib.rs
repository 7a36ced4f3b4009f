//! # Employee Directory
//!
//! A read-only employee directory viewer: fetch a JSON list of employees
//! once, then page through it ten rows at a time.
//!
//! ## Features
//!
//! - **Client-side Pagination**: Page count, visible window and clamped navigation
//! - **Pluggable Sources**: Remote JSON endpoint, local file, or in-memory list
//! - **Two Surfaces**: Terminal table (one-shot or interactive) and an HTML page
//! - **Ordered Fetches**: Out-of-order fetch results are dropped, newest wins
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use employee_directory::pagination::PageSize;
//! use employee_directory::render::{Renderer, RenderOptions, TextRenderer};
//! use employee_directory::source::HttpDataSource;
//! use employee_directory::viewer::DirectoryViewer;
//!
//! #[tokio::main]
//! async fn main() -> employee_directory::Result<()> {
//!     let source = HttpDataSource::new("https://example.com/members.json")?;
//!     let mut viewer = DirectoryViewer::new(source, PageSize::default());
//!
//!     viewer.refresh().await;
//!     viewer.next().await;
//!
//!     let renderer = TextRenderer::new(RenderOptions::default());
//!     print!("{}", renderer.render(&viewer.view()));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐  fetch_all  ┌──────────────────┐  view()  ┌──────────────┐
//! │ DataSource │ ──────────► │ DirectoryViewer  │ ───────► │   Renderer   │
//! │ HTTP/File  │             │ PaginationEngine │          │ Text / HTML  │
//! └────────────┘             └──────────────────┘          └──────────────┘
//!                                     ▲
//!                        go_to_page / next / previous
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client
pub mod http;

/// Client-side pagination
pub mod pagination;

/// Data sources
pub mod source;

/// Viewer state and fetch ordering
pub mod viewer;

/// Table and navigation rendering
pub mod render;

/// Viewer configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use pagination::{PageSize, PaginationEngine};
pub use viewer::{DirectoryViewer, PageView};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

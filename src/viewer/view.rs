//! Page snapshots handed to renderers

use crate::pagination::PaginationEngine;
use crate::types::Employee;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user-visible message raised by a failed load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Text shown to the user
    pub message: String,
    /// When the failure happened
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    /// Create a notice stamped with the current time
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Utc::now(),
        }
    }
}

/// Everything needed to draw one page of the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Current 1-based page
    pub page: usize,
    /// Total pages, at least one
    pub total_pages: usize,
    /// Rows per page
    pub page_size: usize,
    /// Records across all pages
    pub total_records: usize,
    /// Records on this page
    pub rows: Vec<Employee>,
    /// Whether the Previous control is enabled
    pub can_go_previous: bool,
    /// Whether the Next control is enabled
    pub can_go_next: bool,
    /// Targets for numbered page controls
    pub page_numbers: Vec<usize>,
    /// Pending failure notice, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    /// Time of the last successful load
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl PageView {
    /// Snapshot the engine's current page
    pub fn from_engine(engine: &PaginationEngine<Employee>) -> Self {
        Self {
            page: engine.current_page(),
            total_pages: engine.total_pages(),
            page_size: engine.page_size().get(),
            total_records: engine.len(),
            rows: engine.visible_slice().to_vec(),
            can_go_previous: engine.can_go_previous(),
            can_go_next: engine.can_go_next(),
            page_numbers: engine.page_numbers().collect(),
            notice: None,
            fetched_at: None,
        }
    }

    /// Whether the page has no rows to show
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The "Page X of Y" indicator text
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

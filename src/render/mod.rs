//! Table and navigation rendering
//!
//! Renderers are stateless: they turn a [`PageView`] into output and never
//! touch the engine. Both formats draw the same pieces:
//!
//! - a grid with ID (optional), Name, Email and Role columns
//! - a "No data available" row when the page is empty
//! - Previous/Next controls, disabled at the first and last page
//! - optional numbered page controls
//! - the "Page X of Y" indicator

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::types::Employee;
use crate::viewer::PageView;

/// Heading shown above the table
pub const TITLE: &str = "Employee Data";

/// Text of the placeholder row for an empty page
pub const EMPTY_PLACEHOLDER: &str = "No data available";

/// Which optional parts to draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include the ID column
    pub show_id: bool,
    /// Draw numbered page controls
    pub numbered: bool,
}

impl RenderOptions {
    /// Column headers in display order
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = Vec::with_capacity(4);
        if self.show_id {
            headers.push("ID");
        }
        headers.extend(["Name", "Email", "Role"]);
        headers
    }

    /// Cell values for one record, matching [`Self::headers`]
    pub fn cells<'a>(&self, employee: &'a Employee) -> Vec<&'a str> {
        let mut cells = Vec::with_capacity(4);
        if self.show_id {
            cells.push(employee.id.as_str());
        }
        cells.extend([
            employee.name.as_str(),
            employee.email.as_str(),
            employee.role.as_str(),
        ]);
        cells
    }
}

/// Something that can draw a page
pub trait Renderer {
    /// Render a full page: notice, table, navigation and indicator
    fn render(&self, view: &PageView) -> String;
}

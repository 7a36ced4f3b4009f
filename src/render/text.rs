//! Plain-text table for terminals

use super::{RenderOptions, Renderer, EMPTY_PLACEHOLDER, TITLE};
use crate::viewer::PageView;
use std::fmt::Write as _;

/// Draws a page as an aligned ASCII grid
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    options: RenderOptions,
}

impl TextRenderer {
    /// Create a text renderer
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render only the grid
    pub fn table(&self, view: &PageView) -> String {
        let headers = self.options.headers();
        let rows: Vec<Vec<&str>> = view.rows.iter().map(|r| self.options.cells(r)).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        // Widen the last column if the placeholder would not fit
        let inner: usize = widths.iter().map(|w| w + 3).sum::<usize>() - 1;
        if rows.is_empty() && inner < EMPTY_PLACEHOLDER.len() + 2 {
            if let Some(last) = widths.last_mut() {
                *last += EMPTY_PLACEHOLDER.len() + 2 - inner;
            }
        }

        let border = border_line(&widths);
        let mut out = String::new();
        out.push_str(&border);
        out.push_str(&grid_row(&widths, &headers));
        out.push_str(&border);

        if rows.is_empty() {
            let inner = widths.iter().map(|w| w + 3).sum::<usize>() - 1;
            let _ = writeln!(out, "|{EMPTY_PLACEHOLDER:^inner$}|");
        } else {
            for row in &rows {
                out.push_str(&grid_row(&widths, row));
            }
        }

        out.push_str(&border);
        out
    }

    /// Render the Previous/Next line, with numbered pages if enabled
    pub fn navigation(&self, view: &PageView) -> String {
        let mut parts = vec![control("Previous", view.can_go_previous)];
        if self.options.numbered {
            for &page in &view.page_numbers {
                if page == view.page {
                    parts.push(format!("<{page}>"));
                } else {
                    parts.push(page.to_string());
                }
            }
        }
        parts.push(control("Next", view.can_go_next));
        parts.join(" ")
    }
}

impl Renderer for TextRenderer {
    fn render(&self, view: &PageView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{TITLE}");
        if let Some(notice) = &view.notice {
            let _ = writeln!(out, "! {}", notice.message);
        }
        out.push_str(&self.table(view));
        let _ = writeln!(out, "{}", self.navigation(view));
        let _ = writeln!(out, "{}", view.indicator());
        out
    }
}

/// Enabled controls are bracketed, disabled ones parenthesised
fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn grid_row(widths: &[usize], cells: &[&str]) -> String {
    let mut line = String::from("|");
    for (&width, cell) in widths.iter().zip(cells) {
        let _ = write!(line, " {cell:<width$} |");
    }
    line.push('\n');
    line
}

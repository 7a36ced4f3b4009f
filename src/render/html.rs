//! HTML page for the browser

use super::{RenderOptions, Renderer, EMPTY_PLACEHOLDER, TITLE};
use crate::viewer::PageView;
use std::fmt::Write as _;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #999;padding:4px 8px;text-align:left}\
td.empty{text-align:center}\
nav{margin-top:10px;display:flex;justify-content:center;gap:10px}\
.indicator{text-align:center}\
.notice{background:#fdd;border:1px solid #c00;padding:8px;margin-bottom:10px}";

/// Draws a page as a standalone HTML document
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create an HTML renderer
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render only the `<table>` element
    pub fn table(&self, view: &PageView) -> String {
        let headers = self.options.headers();
        let mut out = String::from("<table>\n<thead>\n<tr>");
        for header in &headers {
            let _ = write!(out, "<th>{header}</th>");
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");

        if view.rows.is_empty() {
            let _ = writeln!(
                out,
                "<tr><td class=\"empty\" colspan=\"{}\">{EMPTY_PLACEHOLDER}</td></tr>",
                headers.len()
            );
        } else {
            for row in &view.rows {
                let _ = write!(out, "<tr data-id=\"{}\">", escape_html(&row.id));
                for cell in self.options.cells(row) {
                    let _ = write!(out, "<td>{}</td>", escape_html(cell));
                }
                out.push_str("</tr>\n");
            }
        }

        out.push_str("</tbody>\n</table>\n");
        out
    }

    /// Render the `<nav>` element with page controls
    pub fn navigation(&self, view: &PageView) -> String {
        let mut out = String::from("<nav>");
        out.push_str(&control("Previous", view.page - 1, view.can_go_previous));
        if self.options.numbered {
            for &page in &view.page_numbers {
                if page == view.page {
                    let _ = write!(out, "<strong aria-current=\"page\">{page}</strong>");
                } else {
                    let _ = write!(out, "<a href=\"?page={page}\">{page}</a>");
                }
            }
        }
        out.push_str(&control("Next", view.page + 1, view.can_go_next));
        out.push_str("</nav>\n");
        out
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, view: &PageView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, "<html lang=\"en\">");
        let _ = writeln!(
            out,
            "<head><meta charset=\"utf-8\"><title>{TITLE}</title><style>{STYLE}</style></head>"
        );
        out.push_str("<body>\n");
        let _ = writeln!(out, "<h1>{TITLE}</h1>");
        if let Some(notice) = &view.notice {
            let _ = writeln!(
                out,
                "<div class=\"notice\" role=\"alert\">{}</div>",
                escape_html(&notice.message)
            );
        }
        out.push_str(&self.table(view));
        out.push_str(&self.navigation(view));
        let _ = writeln!(out, "<p class=\"indicator\">{}</p>", view.indicator());
        out.push_str("</body>\n</html>\n");
        out
    }
}

/// Link when enabled, disabled button otherwise
fn control(label: &str, target: usize, enabled: bool) -> String {
    if enabled {
        format!("<a href=\"?page={target}\">{label}</a>")
    } else {
        format!("<button disabled>{label}</button>")
    }
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

//! Interactive paging over stdin

use crate::error::Result;
use crate::render::Renderer;
use crate::source::DataSource;
use crate::viewer::DirectoryViewer;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const HELP: &str = "Commands: n (next), p (previous), <number> (go to page), r (reload), q (quit)";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Advance one page
    Next,
    /// Go back one page
    Previous,
    /// Jump to a page
    Page(usize),
    /// Fetch the directory again
    Reload,
    /// Show the command list
    Help,
    /// Leave the session
    Quit,
    /// Anything else
    Unknown(String),
}

impl BrowseCommand {
    /// Parse a line of input; blank lines mean "next"
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "r" | "reload" => Self::Reload,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => match other.parse::<usize>() {
                Ok(page) => Self::Page(page),
                Err(_) => Self::Unknown(line.to_string()),
            },
        }
    }
}

/// Run a browse session until `q` or end of input.
///
/// The current page is drawn after every command. A failure notice is shown
/// once and then dismissed.
pub async fn run_session<S, R, W>(
    viewer: &mut DirectoryViewer<S>,
    renderer: &dyn Renderer,
    input: R,
    output: &mut W,
) -> Result<()>
where
    S: DataSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    draw(viewer, renderer, output)?;
    writeln!(output, "{HELP}")?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = BrowseCommand::parse(&line);
        debug!(?command, "Browse command");

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            BrowseCommand::Unknown(text) => {
                writeln!(output, "Unknown command '{text}'. {HELP}")?;
                continue;
            }
            BrowseCommand::Next => {
                viewer.next().await;
            }
            BrowseCommand::Previous => {
                viewer.previous().await;
            }
            BrowseCommand::Page(page) => {
                viewer.go_to_page(page).await;
            }
            BrowseCommand::Reload => {
                viewer.refresh().await;
            }
        }

        draw(viewer, renderer, output)?;
    }

    output.flush()?;
    Ok(())
}

fn draw<S: DataSource, W: Write>(
    viewer: &mut DirectoryViewer<S>,
    renderer: &dyn Renderer,
    output: &mut W,
) -> Result<()> {
    write!(output, "{}", renderer.render(&viewer.view()))?;
    viewer.dismiss_notice();
    Ok(())
}

//! CLI module
//!
//! Command-line interface for viewing the directory.
//!
//! # Commands
//!
//! - `show` - Print one page
//! - `browse` - Page through interactively
//! - `serve` - Serve the directory as an HTML page

mod browse;
mod commands;
mod runner;
mod server;

pub use browse::{run_session, BrowseCommand};
pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{build_source, render_options, Runner};
pub use server::{reload, router, serve, AppState, ServerConfig, SharedViewer};

//! CLI commands and argument parsing

use crate::config::ConfigOverrides;
use crate::pagination::PageSize;
use crate::types::RefetchPolicy;
use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Paginated employee directory viewer
#[derive(Parser, Debug)]
#[command(name = "employee-directory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// URL of the JSON employee list
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Read the employee list from a local JSON file
    #[arg(long, global = true, conflicts_with = "endpoint")]
    pub file: Option<PathBuf>,

    /// Rows per page
    #[arg(long, global = true, value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// Fetch timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Show the ID column
    #[arg(long, global = true)]
    pub show_id: bool,

    /// Show numbered page controls
    #[arg(long, global = true)]
    pub numbered: bool,

    /// When to go back to the data source
    #[arg(long, global = true, value_enum)]
    pub refetch: Option<RefetchPolicy>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config values given on the command line
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            file: self.file.clone(),
            page_size: self.page_size,
            timeout_secs: self.timeout,
            show_id: self.show_id,
            numbered: self.numbered,
            refetch: self.refetch,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the directory and print one page
    Show {
        /// Page to print (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Page through the directory interactively
    Browse,

    /// Serve the directory as an HTML page
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Pretty,
    /// One JSON page view
    Json,
}

fn parse_page_size(value: &str) -> std::result::Result<PageSize, String> {
    let size: usize = value
        .parse()
        .map_err(|e| format!("invalid page size '{value}': {e}"))?;
    PageSize::new(size).ok_or_else(|| "page size must be at least 1".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_with_overrides() {
        let cli = Cli::parse_from([
            "employee-directory",
            "--page-size",
            "5",
            "--show-id",
            "--refetch",
            "on-page-change",
            "show",
            "--page",
            "3",
        ]);

        assert!(matches!(cli.command, Commands::Show { page: 3 }));
        let overrides = cli.overrides();
        assert_eq!(overrides.page_size.map(PageSize::get), Some(5));
        assert!(overrides.show_id);
        assert!(!overrides.numbered);
        assert_eq!(overrides.refetch, Some(RefetchPolicy::OnPageChange));
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::parse_from(["employee-directory", "serve"]);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(port, 8080);
                assert!(host.is_loopback());
            }
            other => panic!("Expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let result = Cli::try_parse_from(["employee-directory", "--page-size", "0", "browse"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_conflicts_with_file() {
        let result = Cli::try_parse_from([
            "employee-directory",
            "--endpoint",
            "http://localhost/members.json",
            "--file",
            "members.json",
            "browse",
        ]);
        assert!(result.is_err());
    }
}

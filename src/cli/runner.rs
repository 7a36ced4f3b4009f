//! CLI runner - executes commands

use crate::cli::browse::run_session;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{serve, ServerConfig};
use crate::config::ViewerConfig;
use crate::error::{Error, Result, ResultExt};
use crate::render::{RenderOptions, Renderer, TextRenderer};
use crate::source::{DataSource, FileDataSource, HttpDataSource};
use crate::viewer::{DirectoryViewer, PageView};
use std::io::Write;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let source = build_source(&config)?;
        info!("Reading directory from {}", source.describe());
        let viewer = DirectoryViewer::from_config(source, &config);

        match &self.cli.command {
            Commands::Show { page } => self.show(viewer, &config, *page).await,
            Commands::Browse => self.browse(viewer, &config).await,
            Commands::Serve { host, port } => {
                let server_config = ServerConfig {
                    host: *host,
                    port: *port,
                    render: render_options(&config),
                };
                serve(viewer, server_config).await
            }
        }
    }

    /// Defaults, then the config file, then command-line flags
    fn load_config(&self) -> Result<ViewerConfig> {
        let base = match &self.cli.config {
            Some(path) => ViewerConfig::from_file(path)?,
            None => ViewerConfig::default(),
        };
        let config = base.with_overrides(&self.cli.overrides());
        config.validate()?;
        Ok(config)
    }

    /// Fetch once and print a single page
    async fn show<S: DataSource>(
        &self,
        mut viewer: DirectoryViewer<S>,
        config: &ViewerConfig,
        page: usize,
    ) -> Result<()> {
        viewer.refresh().await;
        if !viewer.go_to_page(page).await && page != viewer.engine().current_page() {
            warn!(
                "Page {} is out of range (1-{}), showing page {}",
                page,
                viewer.engine().total_pages(),
                viewer.engine().current_page()
            );
        }

        self.print_view(&viewer.view(), config)?;

        // Set by whichever fetch completed last, including a refetch on navigation
        match viewer.notice() {
            Some(notice) => Err(Error::Other(notice.message.clone())),
            None => Ok(()),
        }
    }

    /// Interactive session on stdin/stdout
    async fn browse<S: DataSource>(
        &self,
        mut viewer: DirectoryViewer<S>,
        config: &ViewerConfig,
    ) -> Result<()> {
        // A failed first load shows up as the notice on the first page drawn
        viewer.refresh().await;

        let renderer = TextRenderer::new(render_options(config));
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        run_session(&mut viewer, &renderer, stdin, &mut stdout).await
    }

    /// Print a page in the selected output format
    fn print_view(&self, view: &PageView, config: &ViewerConfig) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        match self.cli.format {
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(view).context("Failed to encode page as JSON")?;
                writeln!(stdout, "{json}")?;
            }
            OutputFormat::Pretty => {
                let renderer = TextRenderer::new(render_options(config));
                write!(stdout, "{}", renderer.render(view))?;
            }
        }
        Ok(())
    }
}

/// Pick the data source described by `config`
pub fn build_source(config: &ViewerConfig) -> Result<Arc<dyn DataSource>> {
    let source: Arc<dyn DataSource> = match &config.file {
        Some(path) => Arc::new(FileDataSource::new(path)),
        None => Arc::new(HttpDataSource::with_config(
            &config.endpoint,
            config.http_config(),
        )?),
    };
    Ok(source)
}

/// Table options from config
pub fn render_options(config: &ViewerConfig) -> RenderOptions {
    RenderOptions {
        show_id: config.show_id,
        numbered: config.numbered,
    }
}

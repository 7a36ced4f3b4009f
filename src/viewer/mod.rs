//! Directory viewer
//!
//! Owns one pagination engine and one data source, and applies fetch
//! results to the engine.
//!
//! # Fetch ordering
//!
//! Every fetch is tagged with a generation when it is issued. A result is
//! only applied if no newer fetch has been issued since; older results are
//! reported as [`LoadOutcome::Stale`] and dropped. A failed fetch leaves the
//! records and current page untouched and raises a [`Notice`].

mod view;

pub use view::{Notice, PageView};

use crate::config::ViewerConfig;
use crate::error::{Error, Result, FETCH_FAILURE_MESSAGE};
use crate::pagination::{PageSize, PaginationEngine};
use crate::source::DataSource;
use crate::types::{Employee, RefetchPolicy};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default bound on a single fetch
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle for an issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    /// Position of this fetch in issue order
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened when a fetch result was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records replaced
    Loaded {
        /// Number of records now held
        count: usize,
    },
    /// Fetch failed; state unchanged
    Failed {
        /// Message shown to the user
        message: String,
    },
    /// A newer fetch was issued; result dropped
    Stale,
}

impl LoadOutcome {
    /// Check if the records were replaced
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Check if the fetch failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Run one fetch against `source`, bounded by `timeout`
pub async fn fetch_with_timeout<S: DataSource + ?Sized>(
    source: &S,
    timeout: Duration,
) -> Result<Vec<Employee>> {
    match tokio::time::timeout(timeout, source.fetch_all()).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }),
    }
}

/// Paginated view over a data source
#[derive(Debug)]
pub struct DirectoryViewer<S> {
    source: S,
    engine: PaginationEngine<Employee>,
    refetch: RefetchPolicy,
    timeout: Duration,
    issued: u64,
    notice: Option<Notice>,
    fetched_at: Option<DateTime<Utc>>,
}

impl<S: DataSource> DirectoryViewer<S> {
    /// Create a viewer that fetches once and paginates in memory
    pub fn new(source: S, page_size: PageSize) -> Self {
        Self {
            source,
            engine: PaginationEngine::new(page_size),
            refetch: RefetchPolicy::Once,
            timeout: DEFAULT_FETCH_TIMEOUT,
            issued: 0,
            notice: None,
            fetched_at: None,
        }
    }

    /// Create a viewer using the page size, timeout and refetch policy of `config`
    pub fn from_config(source: S, config: &ViewerConfig) -> Self {
        Self::new(source, config.page_size)
            .with_refetch(config.refetch)
            .with_timeout(config.timeout())
    }

    /// Set the refetch policy
    #[must_use]
    pub fn with_refetch(mut self, policy: RefetchPolicy) -> Self {
        self.refetch = policy;
        self
    }

    /// Set the per-fetch timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The pagination engine
    pub fn engine(&self) -> &PaginationEngine<Employee> {
        &self.engine
    }

    /// The refetch policy
    pub fn refetch_policy(&self) -> RefetchPolicy {
        self.refetch
    }

    /// The per-fetch timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Pending failure notice
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Clear the pending notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Issue a new fetch; any result from an earlier ticket becomes stale
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        debug!(generation = self.issued, source = %self.source.describe(), "Issuing fetch");
        FetchTicket {
            generation: self.issued,
        }
    }

    /// Apply the result of the fetch identified by `ticket`
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Employee>>,
    ) -> LoadOutcome {
        if ticket.generation != self.issued {
            debug!(
                generation = ticket.generation,
                latest = self.issued,
                "Dropping stale fetch result"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                self.engine.load(records);
                self.notice = None;
                self.fetched_at = Some(Utc::now());
                info!("Loaded {} records from {}", count, self.source.describe());
                LoadOutcome::Loaded { count }
            }
            Err(e) => {
                warn!(error = %e, source = %self.source.describe(), "Fetch failed");
                let notice = Notice::new(FETCH_FAILURE_MESSAGE);
                let message = notice.message.clone();
                self.notice = Some(notice);
                LoadOutcome::Failed { message }
            }
        }
    }

    /// Fetch the whole directory and apply it
    pub async fn refresh(&mut self) -> LoadOutcome {
        let ticket = self.begin_fetch();
        let result = fetch_with_timeout(&self.source, self.timeout).await;
        self.complete_fetch(ticket, result)
    }

    /// Move to `page`; ignored when out of range
    pub async fn go_to_page(&mut self, page: usize) -> bool {
        let moved = self.engine.go_to_page(page);
        self.after_navigation(moved).await;
        moved
    }

    /// Advance one page if possible
    pub async fn next(&mut self) -> bool {
        let moved = self.engine.next();
        self.after_navigation(moved).await;
        moved
    }

    /// Go back one page if possible
    pub async fn previous(&mut self) -> bool {
        let moved = self.engine.previous();
        self.after_navigation(moved).await;
        moved
    }

    /// Move without consulting the refetch policy.
    ///
    /// Callers that run the fetch themselves (outside a lock, say) use this
    /// and then check [`Self::needs_refetch`].
    pub fn navigate_only(&mut self, page: usize) -> bool {
        self.engine.go_to_page(page)
    }

    /// Whether a page change should be followed by a fetch
    pub fn needs_refetch(&self, moved: bool) -> bool {
        moved && self.refetch == RefetchPolicy::OnPageChange
    }

    async fn after_navigation(&mut self, moved: bool) {
        if self.needs_refetch(moved) {
            self.refresh().await;
        }
    }

    /// Snapshot of the current page
    pub fn view(&self) -> PageView {
        let mut view = PageView::from_engine(&self.engine);
        view.notice.clone_from(&self.notice);
        view.fetched_at = self.fetched_at;
        view
    }
}

use crate::domain::entities::project::ProjectListing;
use crate::infrastructure::gitlab::{GitLabApiError, ProjectPageSource};
use thiserror::Error;
use tracing::debug;

/// Page size requested from the listing endpoint.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Index of the first requested page.
pub const DEFAULT_START_PAGE: u32 = 0;

/// Upper bound on the number of requested pages.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Errors raised while listing the projects of a group
#[derive(Debug, Error)]
pub enum ListProjectsError {
    #[error("page {page}: {source}")]
    PageFetchFailed {
        page: u32,
        #[source]
        source: GitLabApiError,
    },

    #[error("no empty page returned after {max_pages} pages")]
    PageLimitExceeded { max_pages: u32 },
}

/// Pagination settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProjectsConfig {
    pub start_page: u32,
    pub per_page: u32,
    pub max_pages: u32,
}

impl Default for ListProjectsConfig {
    fn default() -> Self {
        Self {
            start_page: DEFAULT_START_PAGE,
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ListProjectsConfig {
    pub fn with_start_page(mut self, start_page: u32) -> Self {
        self.start_page = start_page;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Collects the names of every project in a group, page by page.
pub struct ListProjectsUseCase<S> {
    source: S,
    config: ListProjectsConfig,
}

impl<S: ProjectPageSource> ListProjectsUseCase<S> {
    pub fn new(source: S, config: ListProjectsConfig) -> Self {
        Self { source, config }
    }

    /// Request pages until one comes back empty.
    ///
    /// Any failed page aborts the whole listing; nothing gathered so far is
    /// returned.
    pub async fn execute(&self) -> Result<ProjectListing, ListProjectsError> {
        let mut listing = ProjectListing::new();

        for offset in 0..self.config.max_pages {
            let page = self.config.start_page.saturating_add(offset);
            let projects = self
                .source
                .fetch_page(page, self.config.per_page)
                .await
                .map_err(|source| ListProjectsError::PageFetchFailed { page, source })?;

            if projects.is_empty() {
                debug!(page, total = listing.len(), "Reached empty page");
                return Ok(listing);
            }

            debug!(page, count = projects.len(), "Received project page");
            listing.extend_page(projects);
        }

        Err(ListProjectsError::PageLimitExceeded {
            max_pages: self.config.max_pages,
        })
    }
}

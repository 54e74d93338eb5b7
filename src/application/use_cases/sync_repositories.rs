use crate::domain::entities::project::ProjectListing;
use crate::domain::value_objects::{group_path::GroupPath, remote_url::RemoteUrl};
use crate::infrastructure::scm::{ScmError, ScmOperations};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while mirroring repositories locally
#[derive(Debug, Error)]
pub enum SyncRepositoriesError {
    #[error("Failed to create target directory {path}: {source}")]
    TargetDirectoryFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to clone {project}: {source}")]
    CloneFailed {
        project: String,
        /// Projects fully processed before this one
        completed: usize,
        #[source]
        source: ScmError,
    },

    #[error("Failed to fetch {project}: {source}")]
    FetchFailed {
        project: String,
        /// Projects fully processed before this one
        completed: usize,
        #[source]
        source: ScmError,
    },
}

impl SyncRepositoriesError {
    /// Name of the project whose clone or fetch failed.
    pub fn project(&self) -> Option<&str> {
        match self {
            Self::CloneFailed { project, .. } | Self::FetchFailed { project, .. } => {
                Some(project.as_str())
            }
            Self::TargetDirectoryFailed { .. } => None,
        }
    }
}

/// Where and what to mirror
#[derive(Debug, Clone)]
pub struct SyncRepositoriesConfig {
    /// Local mirror root
    pub target_directory: PathBuf,

    /// Host used in clone URLs
    pub host: String,

    /// Group used in clone URLs
    pub group: GroupPath,

    /// Log decisions without running git
    pub dry_run: bool,
}

impl SyncRepositoriesConfig {
    pub fn new(target_directory: impl Into<PathBuf>, host: impl Into<String>, group: GroupPath) -> Self {
        Self {
            target_directory: target_directory.into(),
            host: host.into(),
            group,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Local directory of `project`.
    pub fn repo_path(&self, project: &str) -> PathBuf {
        self.target_directory.join(project)
    }

    /// Clone URL of `project`.
    pub fn remote_url(&self, project: &str) -> RemoteUrl {
        RemoteUrl::ssh(&self.host, &self.group, project)
    }
}

/// Outcome of a completed synchronization run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    /// Number of newly cloned repositories
    pub cloned_count: usize,

    /// Number of fetched repositories
    pub fetched_count: usize,

    /// Processed project names, in order
    pub processed: Vec<String>,

    /// Whether git was actually invoked
    pub dry_run: bool,
}

impl SyncResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_count(&self) -> usize {
        self.cloned_count + self.fetched_count
    }

    fn record(&mut self, project: &str, operation: SyncOperation) {
        match operation {
            SyncOperation::Cloned => self.cloned_count += 1,
            SyncOperation::Fetched => self.fetched_count += 1,
        }
        self.processed.push(project.to_string());
    }
}

/// Action taken for one project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOperation {
    /// Absent locally, cloned
    Cloned,
    /// Present locally, fetched
    Fetched,
}

/// Clone-or-fetch over a project listing.
pub struct SyncRepositoriesUseCase<S> {
    scm: S,
    config: SyncRepositoriesConfig,
}

impl<S: ScmOperations> SyncRepositoriesUseCase<S> {
    pub fn new(scm: S, config: SyncRepositoriesConfig) -> Self {
        Self { scm, config }
    }

    pub fn config(&self) -> &SyncRepositoriesConfig {
        &self.config
    }

    /// Synchronize every project in listing order.
    ///
    /// Stops at the first failed clone or fetch; later projects are left untouched.
    pub async fn execute(&self, listing: &ProjectListing) -> Result<SyncResult, SyncRepositoriesError> {
        self.ensure_target_directory().await?;

        let mut result = SyncResult {
            dry_run: self.config.dry_run,
            ..SyncResult::new()
        };

        for project in listing.iter() {
            let completed = result.processed.len();
            let operation = self.sync_single_repository(project, completed).await?;
            result.record(project, operation);
        }

        Ok(result)
    }

    async fn ensure_target_directory(&self) -> Result<(), SyncRepositoriesError> {
        let target = &self.config.target_directory;
        tokio::fs::create_dir_all(target)
            .await
            .map_err(|source| SyncRepositoriesError::TargetDirectoryFailed {
                path: target.display().to_string(),
                source,
            })
    }

    async fn sync_single_repository(
        &self,
        project: &str,
        completed: usize,
    ) -> Result<SyncOperation, SyncRepositoriesError> {
        let repo_path = self.config.repo_path(project);

        if self.is_absent(&repo_path).await {
            self.clone_repository(project, completed).await?;
            Ok(SyncOperation::Cloned)
        } else {
            self.fetch_repository(project, &repo_path, completed).await?;
            Ok(SyncOperation::Fetched)
        }
    }

    /// Only a path that is known not to exist counts as absent. Any other
    /// lookup failure leaves the project to `git fetch`.
    async fn is_absent(&self, repo_path: &Path) -> bool {
        match tokio::fs::try_exists(repo_path).await {
            Ok(exists) => !exists,
            Err(e) => {
                warn!("Cannot inspect {}: {}", repo_path.display(), e);
                false
            }
        }
    }

    async fn clone_repository(&self, project: &str, completed: usize) -> Result<(), SyncRepositoriesError> {
        let url = self.config.remote_url(project);

        if self.config.dry_run {
            info!("Would clone {} from {}", project, url);
            return Ok(());
        }

        info!("Cloning {}", project);
        self.scm
            .clone_repository(url.as_str(), &self.config.target_directory)
            .await
            .map_err(|source| SyncRepositoriesError::CloneFailed {
                project: project.to_string(),
                completed,
                source,
            })
    }

    async fn fetch_repository(
        &self,
        project: &str,
        repo_path: &Path,
        completed: usize,
    ) -> Result<(), SyncRepositoriesError> {
        if self.config.dry_run {
            info!("Would fetch {} in {}", project, repo_path.display());
            return Ok(());
        }

        info!("Fetching {}", project);
        self.scm
            .fetch_origin(repo_path)
            .await
            .map_err(|source| SyncRepositoriesError::FetchFailed {
                project: project.to_string(),
                completed,
                source,
            })
    }
}

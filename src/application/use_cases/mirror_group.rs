use crate::application::use_cases::list_projects::{
    ListProjectsConfig, ListProjectsUseCase, DEFAULT_PER_PAGE, DEFAULT_START_PAGE,
};
use crate::application::use_cases::sync_repositories::{
    SyncRepositoriesConfig, SyncRepositoriesUseCase, SyncResult,
};
use crate::common::error::ClonerError;
use crate::common::result::ClonerResult;
use crate::domain::value_objects::group_path::GroupPath;
use crate::infrastructure::gitlab::{GitLabClient, ProjectPageSource, DEFAULT_TIMEOUT_SECS};
use crate::infrastructure::scm::{GitScm, ScmOperations};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Default API host.
pub const DEFAULT_HOST: &str = "gitlab.com";

/// Settings for one mirror run
#[derive(Clone)]
pub struct MirrorConfig {
    /// API and SSH host
    pub host: String,

    /// Group to mirror
    pub group: GroupPath,

    /// Token sent as the `access_token` query parameter
    pub access_token: String,

    /// Local mirror root
    pub target_directory: PathBuf,

    /// First requested page
    pub start_page: u32,

    /// Projects requested per page
    pub per_page: u32,

    /// Per-request HTTP timeout
    pub timeout: Duration,

    /// Log decisions without running git
    pub dry_run: bool,
}

impl MirrorConfig {
    pub fn new(group: GroupPath, access_token: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            group,
            access_token: access_token.into(),
            target_directory: PathBuf::from("."),
            start_page: DEFAULT_START_PAGE,
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            dry_run: false,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_target_directory(mut self, target_directory: impl Into<PathBuf>) -> Self {
        self.target_directory = target_directory.into();
        self
    }

    pub fn with_start_page(mut self, start_page: u32) -> Self {
        self.start_page = start_page;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reject settings that cannot produce a request.
    pub fn validate(&self) -> ClonerResult<()> {
        if self.host.trim().is_empty() {
            return Err(ClonerError::validation_error("host", "must not be empty", None));
        }
        if self.access_token.is_empty() {
            return Err(ClonerError::validation_error(
                "access-token",
                "must not be empty",
                None,
            ));
        }
        if self.per_page == 0 {
            return Err(ClonerError::validation_error(
                "per_page",
                "must be positive",
                Some(self.per_page.to_string()),
            ));
        }
        Ok(())
    }

    pub fn list_config(&self) -> ListProjectsConfig {
        ListProjectsConfig::default()
            .with_start_page(self.start_page)
            .with_per_page(self.per_page)
    }

    pub fn sync_config(&self) -> SyncRepositoriesConfig {
        SyncRepositoriesConfig::new(&self.target_directory, &self.host, self.group.clone())
            .with_dry_run(self.dry_run)
    }
}

impl fmt::Debug for MirrorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MirrorConfig")
            .field("host", &self.host)
            .field("group", &self.group)
            .field("access_token", &"<redacted>")
            .field("target_directory", &self.target_directory)
            .field("start_page", &self.start_page)
            .field("per_page", &self.per_page)
            .field("timeout", &self.timeout)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

/// Summary of a successful mirror run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorReport {
    /// Number of projects returned by the listing
    pub listed_count: usize,

    pub sync: SyncResult,
}

/// Lists a group's projects, then clones or fetches each one.
pub struct MirrorGroupUseCase<P, S> {
    lister: ListProjectsUseCase<P>,
    synchronizer: SyncRepositoriesUseCase<S>,
}

impl MirrorGroupUseCase<GitLabClient, GitScm> {
    /// Wire the GitLab API client and the `git` executable.
    pub fn from_config(config: &MirrorConfig) -> ClonerResult<Self> {
        config.validate()?;

        let client = GitLabClient::new(
            &config.host,
            config.group.clone(),
            config.access_token.clone(),
            config.timeout,
        )
        .map_err(ClonerError::ClientSetupFailed)?;

        Ok(Self::new(
            ListProjectsUseCase::new(client, config.list_config()),
            SyncRepositoriesUseCase::new(GitScm::new(), config.sync_config()),
        ))
    }
}

impl<P: ProjectPageSource, S: ScmOperations> MirrorGroupUseCase<P, S> {
    pub fn new(lister: ListProjectsUseCase<P>, synchronizer: SyncRepositoriesUseCase<S>) -> Self {
        Self {
            lister,
            synchronizer,
        }
    }

    /// Run the listing and, only if it succeeds, the synchronization.
    pub async fn execute(&self) -> ClonerResult<MirrorReport> {
        let sync_config = self.synchronizer.config();
        info!(
            "Mirroring group {} from {} into {}",
            sync_config.group,
            sync_config.host,
            sync_config.target_directory.display()
        );

        let listing = self.lister.execute().await?;
        info!("Found {} projects", listing.len());

        let sync = self.synchronizer.execute(&listing).await?;

        Ok(MirrorReport {
            listed_count: listing.len(),
            sync,
        })
    }
}

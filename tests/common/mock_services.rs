//! Mock services for testing
//!
//! A recording implementation of [`ScmOperations`] so the synchronizer can be
//! exercised without a `git` client or network access.

use async_trait::async_trait;
use gitlab_cloner::infrastructure::scm::{ScmError, ScmOperations};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded SCM invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScmCall {
    Clone { url: String, working_dir: PathBuf },
    Fetch { repo_path: PathBuf },
}

/// Records every clone/fetch and optionally fails for one project.
///
/// Clones are cheap to share: all clones see the same call history.
#[derive(Clone, Default)]
pub struct RecordingScm {
    calls: Arc<Mutex<Vec<ScmCall>>>,
    fail_on: Option<String>,
    create_on_clone: bool,
}

impl RecordingScm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the clone or fetch of `project`.
    pub fn failing_on(mut self, project: impl Into<String>) -> Self {
        self.fail_on = Some(project.into());
        self
    }

    /// Create the project directory on clone, like `git clone` would.
    pub fn creating_directories(mut self) -> Self {
        self.create_on_clone = true;
        self
    }

    pub fn calls(&self) -> Vec<ScmCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: ScmCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn should_fail(&self, project: &str) -> bool {
        self.fail_on.as_deref() == Some(project)
    }
}

fn project_from_url(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or(url);
    last.strip_suffix(".git").unwrap_or(last)
}

#[async_trait]
impl ScmOperations for RecordingScm {
    async fn clone_repository(&self, url: &str, working_dir: &Path) -> Result<(), ScmError> {
        self.record(ScmCall::Clone {
            url: url.to_string(),
            working_dir: working_dir.to_path_buf(),
        });

        let project = project_from_url(url);
        if self.should_fail(project) {
            return Err(ScmError::command_failed(
                format!("git clone {}", url),
                128,
                "fatal: Could not read from remote repository.",
            ));
        }

        if self.create_on_clone {
            std::fs::create_dir_all(working_dir.join(project))?;
        }
        Ok(())
    }

    async fn fetch_origin(&self, repo_path: &Path) -> Result<(), ScmError> {
        self.record(ScmCall::Fetch {
            repo_path: repo_path.to_path_buf(),
        });

        let project = repo_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.should_fail(&project) {
            return Err(ScmError::command_failed(
                "git fetch origin",
                1,
                "fatal: 'origin' does not appear to be a git repository",
            ));
        }
        Ok(())
    }
}

use super::scm_interface::{ScmError, ScmOperations};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Git implementation of SCM operations, driving the `git` executable
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Execute a git command in `working_dir` and check for success
    async fn execute_git_command_checked(
        &self,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<(), ScmError> {
        let command = format!("{} {}", self.git_executable, args.join(" "));
        debug!(command = %command, dir = %working_dir.display(), "Running git");

        let output = Command::new(&self.git_executable)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound if working_dir.is_dir() => {
                    ScmError::executable_not_found(&self.git_executable)
                }
                _ => ScmError::from(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScmError::command_failed(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl ScmOperations for GitScm {
    async fn clone_repository(&self, url: &str, working_dir: &Path) -> Result<(), ScmError> {
        self.execute_git_command_checked(&["clone", url], working_dir)
            .await
    }

    async fn fetch_origin(&self, repo_path: &Path) -> Result<(), ScmError> {
        self.execute_git_command_checked(&["fetch", "origin"], repo_path)
            .await
    }
}

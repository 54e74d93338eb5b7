/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - GitLab REST API access (project listing)
/// - SCM operations (git clone / fetch)
pub mod gitlab;
pub mod scm;

// Re-export commonly used types
pub use gitlab::{GitLabApiError, GitLabClient, ProjectPageSource};
pub use scm::{GitScm, ScmError, ScmOperations};

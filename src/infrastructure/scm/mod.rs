/// SCM (Source Control Management) operations infrastructure
///
/// Clone and fetch are delegated to an external `git` client.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{ScmError, ScmOperations};

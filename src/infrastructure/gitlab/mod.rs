/// GitLab REST API access
pub mod api_client;

pub use api_client::{GitLabApiError, GitLabClient, ProjectPageSource, DEFAULT_TIMEOUT_SECS};

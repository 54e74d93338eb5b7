use crate::application::use_cases::list_projects::ListProjectsError;
use crate::application::use_cases::sync_repositories::SyncRepositoriesError;
use crate::infrastructure::gitlab::GitLabApiError;
use thiserror::Error;

/// Crate-wide error returned by a mirror run.
#[derive(Error, Debug)]
pub enum ClonerError {
    #[error("Failed to list projects: {0}")]
    ListingFailed(#[from] ListProjectsError),

    #[error(transparent)]
    SyncFailed(#[from] SyncRepositoriesError),

    #[error("Failed to set up GitLab client: {0}")]
    ClientSetupFailed(#[source] GitLabApiError),

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {field} - {message}")]
    ValidationError {
        field: String,
        message: String,
        value: Option<String>,
    },
}

impl ClonerError {
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    /// Whether the failure happened before any repository was touched.
    pub fn is_listing_failure(&self) -> bool {
        matches!(self, Self::ListingFailed(_))
    }
}

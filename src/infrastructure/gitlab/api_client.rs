use crate::domain::entities::project::Project;
use crate::domain::value_objects::group_path::GroupPath;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Default timeout for a single page request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ACCESS_TOKEN_PARAM: &str = "access_token";
const REDACTED: &str = "REDACTED";
const MAX_ERROR_BODY_LEN: usize = 200;

/// Errors raised while fetching a page of projects
#[derive(Debug, Error)]
pub enum GitLabApiError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One page of the group projects listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectPageSource: Send + Sync {
    /// Fetch page `page` holding at most `per_page` projects.
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Project>, GitLabApiError>;
}

/// GitLab REST v4 client for `GET /groups/:id/projects`.
pub struct GitLabClient {
    http_client: reqwest::Client,
    base_url: Url,
    group: GroupPath,
    access_token: String,
}

impl GitLabClient {
    /// Client for `https://{host}`.
    pub fn new(
        host: &str,
        group: GroupPath,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GitLabApiError> {
        Self::with_base_url(&format!("https://{}", host), group, access_token, timeout)
    }

    /// Client for an explicit base URL such as `http://127.0.0.1:8080`.
    pub fn with_base_url(
        base_url: &str,
        group: GroupPath,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GitLabApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| GitLabApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GitLabApiError::InvalidUrl(base_url.to_string()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gitlab-cloner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GitLabApiError::ClientBuild)?;

        Ok(Self {
            http_client,
            base_url,
            group,
            access_token: access_token.into(),
        })
    }

    /// `{base}/api/v4/groups/{group}/projects?access_token=..&page=..&per_page=..`
    pub fn projects_url(&self, page: u32, per_page: u32) -> Result<Url, GitLabApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GitLabApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "v4", "groups"])
            .push(self.group.as_str())
            .push("projects");

        url.query_pairs_mut()
            .append_pair(ACCESS_TOKEN_PARAM, &self.access_token)
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());

        Ok(url)
    }
}

#[async_trait]
impl ProjectPageSource for GitLabClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Project>, GitLabApiError> {
        let url = self.projects_url(page, per_page)?;
        let display_url = redact_url(&url);
        debug!(url = %display_url, page, "Requesting project page");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| GitLabApiError::Transport {
                url: display_url.clone(),
                source: e.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitLabApiError::Status {
                url: display_url,
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GitLabApiError::Transport {
                url: display_url.clone(),
                source: e.without_url(),
            })?;

        serde_json::from_slice(&body).map_err(|source| GitLabApiError::Decode {
            url: display_url,
            source,
        })
    }
}

/// Render `url` with the access token masked.
pub fn redact_url(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == ACCESS_TOKEN_PARAM {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

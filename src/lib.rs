//! # gitlab-cloner - GitLab group mirror
//!
//! `gitlab-cloner` keeps a local copy of every repository that belongs to a
//! GitLab group. Each run lists the group's projects through the REST API and
//! then, for every project, clones it if it is missing locally or fetches
//! `origin` if it is already there.
//!
//! ## Quick Start
//!
//! ```bash
//! gitlab-cloner --group my-group --access-token "$TOKEN" --target-directory ~/src/my-group
//! ```
//!
//! Cloning goes through SSH (`git@{host}:{group}/{project}.git`), so the
//! machine needs a `git` client and SSH credentials accepted by the host.
//!
//! ## Architecture
//!
//! - [`domain`]: projects, group paths and clone URLs
//! - [`application`]: the listing, synchronization and mirror use cases
//! - [`infrastructure`]: the GitLab HTTP client and the `git` process driver
//! - [`presentation`]: CLI interface
//! - [`common`]: error types and logging setup
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use gitlab_cloner::application::use_cases::mirror_group::{MirrorConfig, MirrorGroupUseCase};
//! use gitlab_cloner::domain::value_objects::group_path::GroupPath;
//!
//! # async fn example() -> gitlab_cloner::Result<()> {
//! let config = MirrorConfig::new(GroupPath::new("my-group")?, "glpat-token")
//!     .with_target_directory("/srv/mirror");
//!
//! let report = MirrorGroupUseCase::from_config(&config)?.execute().await?;
//! println!("Cloned {} repositories", report.sync.cloned_count);
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::ClonerError;
pub use crate::common::result::ClonerResult as Result;

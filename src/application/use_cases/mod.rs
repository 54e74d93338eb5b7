pub mod list_projects;
pub mod mirror_group;
pub mod sync_repositories;

pub use list_projects::{ListProjectsConfig, ListProjectsError, ListProjectsUseCase};
pub use mirror_group::{MirrorConfig, MirrorGroupUseCase, MirrorReport};
pub use sync_repositories::{
    SyncOperation, SyncRepositoriesConfig, SyncRepositoriesError, SyncRepositoriesUseCase,
    SyncResult,
};

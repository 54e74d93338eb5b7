pub mod group_path;
pub mod remote_url;

pub use group_path::GroupPath;
pub use remote_url::RemoteUrl;

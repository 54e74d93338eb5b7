use crate::domain::value_objects::group_path::GroupPath;
use std::fmt;

/// SSH clone URL of a project, in scp-like form: `git@{host}:{group}/{name}.git`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteUrl(String);

impl RemoteUrl {
    /// Build the clone URL of `project` in `group` on `host`.
    ///
    /// The project name is used verbatim.
    pub fn ssh(host: &str, group: &GroupPath, project: &str) -> Self {
        Self(format!("git@{}:{}/{}.git", host, group.as_str(), project))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RemoteUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

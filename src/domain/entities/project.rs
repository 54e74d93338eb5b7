use serde::Deserialize;

/// A project as returned by the group projects endpoint.
///
/// Only the name is modelled; every other field of the API object is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Project name, used as-is for the clone URL and the local directory
    pub name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ordered project names collected across all listing pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListing {
    names: Vec<String>,
}

impl ProjectListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page, keeping response order.
    pub fn extend_page(&mut self, page: Vec<Project>) {
        self.names.extend(page.into_iter().map(|project| project.name));
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ProjectListing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

use crate::common::result::{ClonerResult, OptionExt};
use std::fmt;

/// Group (namespace) whose projects are mirrored.
///
/// The value is kept verbatim apart from surrounding whitespace. A full path
/// such as `parent/child` is allowed; it is encoded as one segment in API URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupPath(String);

impl GroupPath {
    pub fn new(raw: &str) -> ClonerResult<Self> {
        let trimmed = Some(raw.trim())
            .filter(|value| !value.is_empty())
            .ok_or_validation_error("group", "must not be empty")?;

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

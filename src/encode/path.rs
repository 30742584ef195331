//! Field paths used to name the offending field in encode errors.

use std::fmt;

use crate::error::EncodeError;

/// Location of a field inside a document, e.g. `steps[2].i18n.title.text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    pub fn index(&self, idx: usize) -> Self {
        Self(format!("{}[{idx}]", self.0))
    }

    pub fn as_str(&self) -> &str {
        if self.0.is_empty() { "<root>" } else { &self.0 }
    }

    /// Build an error pointing at this path.
    pub fn error(&self, reason: impl Into<String>) -> EncodeError {
        EncodeError::new(self.as_str(), reason)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod document;
pub mod error;
pub mod report;

pub use document::KnowledgeDocument;
pub use error::{ForgeError, Result};
pub use report::{Finding, Severity, ValidationReport};

// =============================================================================
// Domain Newtypes
// =============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe wrapper for knowledge document identifiers
///
/// Prevents accidental mixing of document ids with other string types.
/// Ids are opaque and stable within a wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

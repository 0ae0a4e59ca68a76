//! Knowledge Document
//!
//! A named block of Markdown text supplying domain expertise to a configured
//! agent. Content is held in memory as an already-decoded string; file and
//! network access belong to the calling layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DocumentId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub id: DocumentId,
    /// Display title, also the source of the derived tool id and filename
    pub name: String,
    /// Markdown body
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KnowledgeDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            name: name.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Construct with a caller-supplied id (imports, tests)
    pub fn with_id(
        id: impl Into<DocumentId>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content body, stamping the update time
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }

    /// Rename the document, stamping the update time
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Content length in characters, the unit all limits are expressed in
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// True when the content is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

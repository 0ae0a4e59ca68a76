//! Export Bundle
//!
//! The read-only projection assembled at the Review step: one Markdown
//! artifact per knowledge document (raw content plus a generated footer) and
//! a structured manifest of project fields, agent fields, and derived tools.

pub mod slug;
pub mod writer;

pub use slug::{derive_tool_id, slugify, unique_tool_ids};
pub use writer::BundleWriter;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::{AgentFields, ProjectFields};
use crate::wizard::{DerivedTool, WizardSession};

/// A complete, export-ready bundle
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub generated_at: DateTime<Utc>,
    pub project: ProjectFields,
    pub agent: AgentFields,
    pub tools: Vec<DerivedTool>,
    pub documents: Vec<BundleDocument>,
}

/// One knowledge document rendered for export
#[derive(Debug, Clone)]
pub struct BundleDocument {
    /// `KB{n}_{slug}.md`, n being the 1-based position in the session
    pub filename: String,
    pub name: String,
    pub tool_id: String,
    /// Character count of the rendered content
    pub chars: usize,
    /// Hex digest of the rendered content, for the deployment pipeline to
    /// verify uploads against
    pub sha256: String,
    /// Raw content plus the generated footer
    pub content: String,
}

/// Manifest projection: everything except the raw document bodies, which
/// live in the per-document artifacts
#[derive(Debug, Serialize)]
pub struct BundleManifest<'a> {
    pub generated_at: DateTime<Utc>,
    pub project: &'a ProjectFields,
    pub agent: &'a AgentFields,
    pub tools: &'a [DerivedTool],
    pub documents: Vec<ManifestEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry<'a> {
    pub filename: &'a str,
    pub name: &'a str,
    pub tool_id: &'a str,
    pub chars: usize,
    pub sha256: &'a str,
}

impl ExportBundle {
    /// Assemble the bundle from the session's current state.
    ///
    /// The session keeps `derived_tools` aligned with `documents`, so the
    /// two are zipped positionally.
    pub fn from_session(session: &WizardSession) -> Self {
        let total = session.documents().len();
        let documents = session
            .documents()
            .iter()
            .zip(session.derived_tools())
            .enumerate()
            .map(|(i, (doc, tool))| {
                let content = render_content(&doc.content, &doc.name, i + 1, total);
                BundleDocument {
                    filename: format!("KB{}_{}.md", i + 1, slugify(&doc.name)),
                    name: doc.name.clone(),
                    tool_id: tool.tool_id.clone(),
                    chars: content.chars().count(),
                    sha256: hex_digest(&content),
                    content,
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            project: session.project().clone(),
            agent: session.agent().clone(),
            tools: session.derived_tools().to_vec(),
            documents,
        }
    }

    pub fn manifest(&self) -> BundleManifest<'_> {
        BundleManifest {
            generated_at: self.generated_at,
            project: &self.project,
            agent: &self.agent,
            tools: &self.tools,
            documents: self
                .documents
                .iter()
                .map(|doc| ManifestEntry {
                    filename: &doc.filename,
                    name: &doc.name,
                    tool_id: &doc.tool_id,
                    chars: doc.chars,
                    sha256: &doc.sha256,
                })
                .collect(),
        }
    }
}

fn render_content(content: &str, name: &str, index: usize, total: usize) -> String {
    format!(
        "{}\n\n---\n_Knowledge base {} of {}: {}_\n",
        content.trim_end(),
        index,
        total,
        name
    )
}

fn hex_digest(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

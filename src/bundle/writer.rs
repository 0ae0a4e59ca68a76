//! Bundle Writer
//!
//! The only filesystem writer in the repository. Writes an assembled bundle
//! to an output directory: one Markdown artifact per knowledge document plus
//! the structured JSON manifest for the deployment pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::export::MANIFEST_FILE;
use crate::types::Result;

use super::ExportBundle;

pub struct BundleWriter {
    output_dir: PathBuf,
}

impl BundleWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write every artifact, returning the paths in write order
    pub fn write(&self, bundle: &ExportBundle) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let mut written = Vec::with_capacity(bundle.documents.len() + 1);

        for doc in &bundle.documents {
            let path = self.output_dir.join(&doc.filename);
            fs::write(&path, &doc.content)?;
            info!("wrote {} ({} chars)", path.display(), doc.chars);
            written.push(path);
        }

        let manifest_path = self.output_dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(&bundle.manifest())?;
        fs::write(&manifest_path, json)?;
        info!("wrote {}", manifest_path.display());
        written.push(manifest_path);

        Ok(written)
    }
}

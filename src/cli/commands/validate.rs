//! Validate Command
//!
//! Validates knowledge base files against the content rules and the
//! cross-file duplicate check.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{ForgeError, KnowledgeDocument, Result, Severity, ValidationReport};
use crate::validator::{ContentValidator, Reporter};

pub fn run(paths: Vec<PathBuf>, report_path: Option<PathBuf>, severity: &str) -> Result<()> {
    let files = expand_paths(&paths)?;
    if files.is_empty() {
        return Err(ForgeError::Validation(
            "no Markdown files found to validate".to_string(),
        ));
    }

    println!("Validating {} knowledge base file(s)...", files.len());
    println!();

    let docs: Vec<KnowledgeDocument> = files
        .iter()
        .map(|path| load_document(path))
        .collect::<Result<_>>()?;

    let reports = ContentValidator::validate_batch(&docs);

    let min_severity = match severity.to_lowercase().as_str() {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => Severity::Info,
    };

    let results: Vec<(String, ValidationReport)> = docs
        .iter()
        .map(|d| d.name.clone())
        .zip(reports)
        .collect();

    for (name, report) in &results {
        Reporter::print_report(name, report, min_severity);
    }
    Reporter::print_summary(&results);

    if let Some(path) = report_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Reporter::generate_json(&results, &path)?;
        println!();
        println!("Report saved to: {}", path.display());
    }

    if results.iter().any(|(_, r)| !r.is_passing()) {
        return Err(ForgeError::Validation(
            "validation found errors; check the report for details".to_string(),
        ));
    }

    Ok(())
}

/// Load a Markdown file as a knowledge document. Decoding is lossy: invalid
/// bytes become replacement characters for the encoding rule to flag.
fn load_document(path: &Path) -> Result<KnowledgeDocument> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    let name = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string();
    Ok(KnowledgeDocument::new(name, content))
}

/// Expand directories into their `*.md` files, keep files as-is, and sort
/// for a stable validation (and duplicate-attribution) order.
fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let pattern = path.join("*.md");
            let matches = glob::glob(&pattern.to_string_lossy())
                .map_err(|e| ForgeError::Config(format!("Bad glob pattern: {}", e)))?;
            for entry in matches {
                files.push(
                    entry.map_err(|e| ForgeError::Config(format!("Unreadable path: {}", e)))?,
                );
            }
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    Ok(files)
}

//! Content Validation Engine
//!
//! Runs the per-document rule set in a fixed order and the batch-level
//! duplicate-paragraph pass. Purely functional over its input: rule
//! violations become report entries, never errors, and a batch run always
//! accumulates the complete set of findings across all documents.

use std::collections::HashMap;

use crate::constants::duplicates;
use crate::types::{KnowledgeDocument, ValidationReport};

use super::rules;

/// A paragraph repeated across documents, attributed to the later document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFinding {
    /// Index of the document that repeats the paragraph
    pub doc_index: usize,
    /// Name of the document that produced the paragraph first
    pub origin: String,
}

pub struct ContentValidator;

impl ContentValidator {
    /// Validate a single document, applying every rule in fixed order.
    ///
    /// Rules are independent: one failing never short-circuits the rest.
    /// The single exception is an empty document, where the structural
    /// checks are skipped because there is nothing left to inspect.
    pub fn validate_document(doc: &KnowledgeDocument) -> ValidationReport {
        let mut report = ValidationReport::new();

        rules::check_encoding(doc, &mut report);

        let blank = doc.is_blank();
        if blank {
            report.error(&doc.name, "file is empty");
        }
        rules::check_size(doc, &mut report);
        if blank {
            return report;
        }

        rules::check_headings(doc, &mut report);
        rules::check_structure_counts(doc, &mut report);
        rules::check_code_fences(doc, &mut report);
        rules::check_links(doc, &mut report);
        rules::check_leading_heading(doc, &mut report);
        rules::check_short_content(doc, &mut report);
        rules::check_non_ascii(doc, &mut report);

        report
    }

    /// Validate a batch: one report per document, in input order, with
    /// cross-document duplicate warnings appended to the repeating
    /// document's report.
    pub fn validate_batch(docs: &[KnowledgeDocument]) -> Vec<ValidationReport> {
        let mut reports: Vec<ValidationReport> =
            docs.iter().map(Self::validate_document).collect();

        for dup in Self::detect_duplicates(docs) {
            reports[dup.doc_index].warning(
                &docs[dup.doc_index].name,
                duplicate_message(&dup.origin),
            );
        }

        reports
    }

    /// Cross-document duplicate-paragraph pass.
    ///
    /// Exact-match on trimmed paragraph text, restricted to paragraphs over
    /// the minimum length. Order-dependent: the first document to produce a
    /// paragraph owns it, and every later document repeating it is flagged.
    pub fn detect_duplicates(docs: &[KnowledgeDocument]) -> Vec<DuplicateFinding> {
        let mut first_seen: HashMap<&str, &str> = HashMap::new();
        let mut findings = Vec::new();

        for (doc_index, doc) in docs.iter().enumerate() {
            for paragraph in rules::paragraphs(&doc.content) {
                if paragraph.chars().count() <= duplicates::MIN_PARAGRAPH_CHARS {
                    continue;
                }
                match first_seen.get(paragraph) {
                    Some(&origin) if origin != doc.name => findings.push(DuplicateFinding {
                        doc_index,
                        origin: origin.to_string(),
                    }),
                    Some(_) => {}
                    None => {
                        first_seen.insert(paragraph, &doc.name);
                    }
                }
            }
        }

        findings
    }
}

/// Shared warning text so batch validation and callers never drift apart
pub fn duplicate_message(origin: &str) -> String {
    format!("paragraph duplicates content from '{}'", origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::limits;

    fn doc(name: &str, content: impl Into<String>) -> KnowledgeDocument {
        KnowledgeDocument::new(name, content)
    }

    /// A paragraph long enough to participate in duplicate detection.
    fn long_paragraph(seed: &str) -> String {
        format!(
            "{} covers customer lifetime value modeling across cohorts, \
             churn prediction windows, and retention campaign sequencing.",
            seed
        )
    }

    #[test]
    fn test_size_boundary_at_exact_limit() {
        let report =
            ContentValidator::validate_document(&doc("Max", "x".repeat(limits::MAX_CONTENT_CHARS)));
        assert!(report.errors.iter().all(|f| !f.message.contains("limit")));

        let report = ContentValidator::validate_document(&doc(
            "Over",
            "x".repeat(limits::MAX_CONTENT_CHARS + 1),
        ));
        let size_errors: Vec<_> = report
            .errors
            .iter()
            .filter(|f| f.message.contains("remove 1 character(s)"))
            .collect();
        assert_eq!(size_errors.len(), 1);
    }

    #[test]
    fn test_warning_band_boundary() {
        let report = ContentValidator::validate_document(&doc(
            "Warn",
            "x".repeat(limits::WARN_CONTENT_CHARS),
        ));
        assert!(report.is_passing());
        assert!(
            report
                .warnings
                .iter()
                .any(|f| f.message.contains("approaching"))
        );

        let report = ContentValidator::validate_document(&doc(
            "Under",
            "x".repeat(limits::WARN_CONTENT_CHARS - 1),
        ));
        assert!(report.is_passing());
        assert!(
            !report
                .warnings
                .iter()
                .any(|f| f.message.contains("approaching"))
        );
        assert!(report.info.iter().any(|f| f.message.contains("characters used")));
    }

    #[test]
    fn test_empty_document_short_circuits_structural_rules() {
        let report = ContentValidator::validate_document(&doc("Empty", "   \n\t"));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].message, "file is empty");
        // No heading/list/fence findings, only the size usage note.
        assert_eq!(report.warning_count(), 0);
        assert_eq!(report.info_count(), 1);
    }

    #[test]
    fn test_odd_fence_count_always_errors() {
        let report =
            ContentValidator::validate_document(&doc("Odd", "# Doc\n\n```\nlet x = 1;\n"));
        assert!(
            report
                .errors
                .iter()
                .any(|f| f.message == "unclosed code block detected")
        );

        let report = ContentValidator::validate_document(&doc(
            "Even",
            "# Doc\n\n```\nlet x = 1;\n```\n\n```\nmore\n```",
        ));
        assert!(report.is_passing());
    }

    #[test]
    fn test_encoding_issue_reported_once() {
        let report =
            ContentValidator::validate_document(&doc("Bad", "# Doc\n\nbroken \u{FFFD} text \u{FFFD}"));
        let encoding_errors: Vec<_> = report
            .errors
            .iter()
            .filter(|f| f.message.contains("encoding"))
            .collect();
        assert_eq!(encoding_errors.len(), 1);
    }

    #[test]
    fn test_duplicate_detection_is_order_sensitive() {
        let shared = long_paragraph("The segmentation playbook");
        let a = doc("A", format!("# A\n\n{}\n\nunique to a", shared));
        let b = doc("B", format!("# B\n\n{}\n\nunique to b", shared));

        let dups = ContentValidator::detect_duplicates(&[a.clone(), b.clone()]);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].doc_index, 1);
        assert_eq!(dups[0].origin, "A");

        let dups = ContentValidator::detect_duplicates(&[b, a]);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].doc_index, 1);
        assert_eq!(dups[0].origin, "B");
    }

    #[test]
    fn test_short_paragraphs_excluded_from_duplicates() {
        let short = "Shared boilerplate line.";
        let a = doc("A", format!("# A\n\n{}", short));
        let b = doc("B", format!("# B\n\n{}", short));
        assert!(ContentValidator::detect_duplicates(&[a, b]).is_empty());
    }

    #[test]
    fn test_repeat_within_same_document_not_flagged() {
        let shared = long_paragraph("Internal style guide");
        let a = doc("A", format!("# A\n\n{}\n\n{}", shared, shared));
        assert!(ContentValidator::detect_duplicates(&[a]).is_empty());
    }

    #[test]
    fn test_batch_attaches_duplicate_warning_to_later_document() {
        let shared = long_paragraph("Campaign attribution");
        let a = doc("A", format!("# A\n\n{}", shared));
        let b = doc("B", format!("# B\n\n{}", shared));

        let reports = ContentValidator::validate_batch(&[a, b]);
        assert_eq!(reports.len(), 2);
        assert!(!reports[0].warnings.iter().any(|f| f.message.contains("duplicates")));
        assert!(
            reports[1]
                .warnings
                .iter()
                .any(|f| f.message == duplicate_message("A"))
        );
    }

    #[test]
    fn test_short_document_passes_with_warnings_only() {
        // 5 characters, no heading: warnings for missing heading, missing
        // leading heading, and short content, but zero errors.
        let report = ContentValidator::validate_document(&doc("Policy", "short"));
        assert!(report.is_passing());
        assert!(report.warning_count() >= 2);
    }

    #[test]
    fn test_overage_message_cites_exact_count() {
        let report = ContentValidator::validate_document(&doc("Big", "x".repeat(20_000)));
        assert_eq!(report.error_count(), 1);
        assert!(report.errors[0].message.contains("2000"));
    }
}

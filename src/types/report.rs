//! Validation Report Types
//!
//! A report is three explicit typed lists of findings. Only errors affect
//! pass/fail; warnings and info are surfaced to the caller but never block.

use serde::{Deserialize, Serialize};

/// A single validation finding: the subject it concerns and a human message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Document name or field path the finding concerns
    pub subject: String,
    /// Detailed message
    pub message: String,
}

impl Finding {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Finding severity, ordered most severe first for report filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Structured result of validating a document or a wizard step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Conditions that block progression
    pub errors: Vec<Finding>,
    /// Surfaced to the user, non-blocking
    pub warnings: Vec<Finding>,
    /// Advisory notes (counts, usage figures)
    pub info: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Finding::new(subject, message));
    }

    pub fn warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Finding::new(subject, message));
    }

    pub fn info(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.info.push(Finding::new(subject, message));
    }

    /// A report passes when it carries zero errors. Warnings and info
    /// never affect the outcome.
    pub fn is_passing(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.info.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn info_count(&self) -> usize {
        self.info.len()
    }

    /// Absorb another report, preserving the order of each list
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.info.extend(other.info);
    }

    /// Iterate all findings paired with their severity, errors first
    pub fn findings(&self) -> impl Iterator<Item = (Severity, &Finding)> {
        self.errors
            .iter()
            .map(|f| (Severity::Error, f))
            .chain(self.warnings.iter().map(|f| (Severity::Warning, f)))
            .chain(self.info.iter().map(|f| (Severity::Info, f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_passes() {
        let report = ValidationReport::new();
        assert!(report.is_passing());
        assert!(report.is_empty());
    }

    #[test]
    fn test_warnings_never_block() {
        let mut report = ValidationReport::new();
        report.warning("doc", "approaching limit");
        report.info("doc", "42 list items");
        assert!(report.is_passing());
        assert!(!report.is_empty());
    }

    #[test]
    fn test_single_error_fails() {
        let mut report = ValidationReport::new();
        report.error("doc", "file is empty");
        assert!(!report.is_passing());
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut a = ValidationReport::new();
        a.error("first", "e1");
        let mut b = ValidationReport::new();
        b.error("second", "e2");
        b.warning("second", "w1");

        a.merge(b);
        assert_eq!(a.errors.len(), 2);
        assert_eq!(a.errors[0].subject, "first");
        assert_eq!(a.errors[1].subject, "second");
        assert_eq!(a.warning_count(), 1);
    }

    #[test]
    fn test_findings_iterates_by_severity() {
        let mut report = ValidationReport::new();
        report.info("d", "i");
        report.error("d", "e");
        report.warning("d", "w");

        let severities: Vec<Severity> = report.findings().map(|(s, _)| s).collect();
        assert_eq!(
            severities,
            vec![Severity::Error, Severity::Warning, Severity::Info]
        );
    }
}

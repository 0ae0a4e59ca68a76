//! Report Rendering
//!
//! Console and JSON output for validation reports. Pass/fail policy stays in
//! the caller: the reporter only renders what the engine found.

use std::fs;
use std::path::Path;

use console::style;
use serde::Serialize;

use crate::types::{Finding, Result, Severity, ValidationReport};

/// One document's outcome, as serialized into the JSON report
#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    pub name: &'a str,
    pub report: &'a ValidationReport,
}

pub struct Reporter;

impl Reporter {
    /// Print one document's findings, filtered to a minimum severity
    pub fn print_report(name: &str, report: &ValidationReport, min_severity: Severity) {
        let shown: Vec<(Severity, &Finding)> = report
            .findings()
            .filter(|(severity, _)| *severity <= min_severity)
            .collect();

        if report.is_passing() {
            println!("{} {}", style("✓").green(), style(name).bold());
        } else {
            println!("{} {}", style("✗").red(), style(name).bold());
        }

        for (severity, finding) in shown {
            let icon = match severity {
                Severity::Error => style("✗").red(),
                Severity::Warning => style("⚠").yellow(),
                Severity::Info => style("ℹ").blue(),
            };
            println!(
                "  {} [{}] {}",
                icon,
                format!("{:?}", severity).to_uppercase(),
                finding.message
            );
        }
    }

    /// Print the overall result line for a batch
    pub fn print_summary(results: &[(String, ValidationReport)]) {
        let errors: usize = results.iter().map(|(_, r)| r.error_count()).sum();
        let warnings: usize = results.iter().map(|(_, r)| r.warning_count()).sum();

        println!();
        println!("══════════════════════════════════════");
        if errors > 0 {
            println!(
                "Result: {} ({} error(s), {} warning(s) across {} document(s))",
                style("FAILED").red().bold(),
                errors,
                warnings,
                results.len()
            );
        } else if warnings > 0 {
            println!(
                "Result: {} with {} warning(s) across {} document(s)",
                style("PASSED").green().bold(),
                warnings,
                results.len()
            );
        } else {
            println!(
                "Result: {} ({} document(s))",
                style("PASSED ✓").green().bold(),
                results.len()
            );
        }
    }

    /// Write the full batch outcome as pretty-printed JSON
    pub fn generate_json<P: AsRef<Path>>(
        results: &[(String, ValidationReport)],
        output_path: P,
    ) -> Result<()> {
        let entries: Vec<ReportEntry<'_>> = results
            .iter()
            .map(|(name, report)| ReportEntry { name, report })
            .collect();

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(output_path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_json_writes_all_entries() {
        let mut report = ValidationReport::new();
        report.warning("Policy", "no headings found");
        let results = vec![("Policy".to_string(), report)];

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        Reporter::generate_json(&results, &path).expect("write report");

        let raw = std::fs::read_to_string(&path).expect("read back");
        let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(parsed[0]["name"], "Policy");
        assert_eq!(parsed[0]["report"]["warnings"][0]["message"], "no headings found");
    }
}

//! Per-Document Validation Rules
//!
//! Each rule is a pure function appending findings to a report. Markdown
//! structure detection is intentionally a set of shallow regex scans, not a
//! real Markdown parser: heading/list/link edge cases must stay stable for
//! reproducibility with downstream tooling.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::limits;
use crate::types::{KnowledgeDocument, ValidationReport};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+\s+.+$").expect("heading regex"));

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[*+-]\s+.+$").expect("list item regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("link regex"));

static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("blank line regex"));

/// Content must be valid UTF-8 text. `String` already guarantees the byte
/// encoding, so the observable failure mode is U+FFFD replacement characters
/// left behind by a lossy decode at the loading edge. Reported once.
pub fn check_encoding(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    if doc.content.contains('\u{FFFD}') {
        report.error(
            &doc.name,
            "content contains replacement characters (encoding issue)",
        );
    }
}

/// Character count against the hard ceiling, with a warning band at 90%.
pub fn check_size(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    let count = doc.char_count();
    if count > limits::MAX_CONTENT_CHARS {
        let over = count - limits::MAX_CONTENT_CHARS;
        report.error(
            &doc.name,
            format!(
                "content is {} characters, exceeding the {}-character limit; remove {} character(s)",
                count,
                limits::MAX_CONTENT_CHARS,
                over
            ),
        );
    } else if count >= limits::WARN_CONTENT_CHARS {
        report.warning(
            &doc.name,
            format!(
                "content is {} characters, approaching the {}-character limit",
                count,
                limits::MAX_CONTENT_CHARS
            ),
        );
    } else {
        report.info(
            &doc.name,
            format!("{}/{} characters used", count, limits::MAX_CONTENT_CHARS),
        );
    }
}

/// At least one Markdown heading anywhere in the document.
pub fn check_headings(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    if !HEADING_RE.is_match(&doc.content) {
        report.warning(&doc.name, "no headings found");
    }
}

/// Informational counts for list items and fenced code blocks.
pub fn check_structure_counts(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    let list_items = LIST_ITEM_RE.find_iter(&doc.content).count();
    if list_items > 0 {
        report.info(&doc.name, format!("{} list item(s)", list_items));
    }

    let fences = fence_marker_count(&doc.content);
    if fences >= 2 {
        report.info(&doc.name, format!("{} fenced code block(s)", fences / 2));
    }
}

/// Triple-backtick markers must pair up; an odd count means a fence was
/// opened and never closed.
pub fn check_code_fences(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    if fence_marker_count(&doc.content) % 2 != 0 {
        report.error(&doc.name, "unclosed code block detected");
    }
}

/// External (`http`-prefixed) link targets are counted, never fetched.
pub fn check_links(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    let external = LINK_RE
        .captures_iter(&doc.content)
        .filter(|cap| cap[1].starts_with("http"))
        .count();
    if external > 0 {
        report.info(&doc.name, format!("{} external link(s)", external));
    }
}

/// The first non-blank line should be a heading.
pub fn check_leading_heading(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    let first_line = doc
        .content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    if !first_line.trim_start().starts_with('#') {
        report.warning(&doc.name, "file should start with a heading");
    }
}

/// Documents under the minimum length are probably placeholders.
pub fn check_short_content(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    if doc.char_count() < limits::MIN_CONTENT_CHARS {
        report.warning(
            &doc.name,
            format!("very little content (under {} characters)", limits::MIN_CONTENT_CHARS),
        );
    }
}

/// High non-ASCII density is advisory only.
pub fn check_non_ascii(doc: &KnowledgeDocument, report: &mut ValidationReport) {
    let count = doc.content.chars().filter(|c| !c.is_ascii()).count();
    if count > limits::NON_ASCII_NOTE_THRESHOLD {
        report.info(&doc.name, format!("{} non-ASCII characters", count));
    }
}

/// Split content on blank-line boundaries into trimmed paragraphs.
pub fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    BLANK_LINE_RE
        .split(content)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

fn fence_marker_count(content: &str) -> usize {
    content.matches("```").count()
}

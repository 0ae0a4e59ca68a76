//! Per-Step Validation Gates
//!
//! Each gate inspects the session data for one step and returns a report.
//! The blocking policy (errors stop `advance`, warnings never do) lives in
//! the session, not here.

use crate::config::{AgentFields, ProjectFields};
use crate::constants::agent;
use crate::types::{KnowledgeDocument, ValidationReport};
use crate::validator::ContentValidator;

/// Knowledge-base gate: at least one document, every document named, zero
/// validator errors per document. Duplicate-content warnings are surfaced
/// through the merged batch reports but never block.
pub fn knowledge_gate(docs: &[KnowledgeDocument]) -> ValidationReport {
    let mut report = ValidationReport::new();

    if docs.is_empty() {
        report.error("knowledge bases", "at least one knowledge base is required");
        return report;
    }

    for doc in docs {
        if doc.name.trim().is_empty() {
            report.error(doc.id.as_str(), "knowledge base name is required");
        }
    }

    for doc_report in ContentValidator::validate_batch(docs) {
        report.merge(doc_report);
    }

    report
}

pub fn project_gate(fields: &ProjectFields) -> ValidationReport {
    let mut report = ValidationReport::new();

    if fields.name.trim().is_empty() {
        report.error("project.name", "project name is required");
    }
    if fields.description.trim().is_empty() {
        report.error("project.description", "project description is required");
    }

    report
}

/// Agent gate. `max_tool_iterations` is a `u32`, so the non-negative
/// requirement holds by construction and needs no runtime check.
pub fn agent_gate(fields: &AgentFields) -> ValidationReport {
    let mut report = ValidationReport::new();

    if fields.name.trim().is_empty() {
        report.error("agent.name", "agent name is required");
    }
    if fields.system_prompt.trim().is_empty() {
        report.error("agent.system_prompt", "system prompt is required");
    }
    if !(0.0..=agent::MAX_TEMPERATURE).contains(&fields.temperature) {
        report.error(
            "agent.temperature",
            format!(
                "temperature must be between 0.0 and {}, got {}",
                agent::MAX_TEMPERATURE,
                fields.temperature
            ),
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectKind;

    #[test]
    fn test_knowledge_gate_requires_a_document() {
        let report = knowledge_gate(&[]);
        assert!(!report.is_passing());
        assert_eq!(
            report.errors[0].message,
            "at least one knowledge base is required"
        );
    }

    #[test]
    fn test_knowledge_gate_requires_names() {
        let docs = vec![KnowledgeDocument::new("", "# Doc\n\nsome body")];
        let report = knowledge_gate(&docs);
        assert!(
            report
                .errors
                .iter()
                .any(|f| f.message == "knowledge base name is required")
        );
    }

    #[test]
    fn test_knowledge_gate_passes_with_warnings() {
        let docs = vec![KnowledgeDocument::new("Policy", "short")];
        let report = knowledge_gate(&docs);
        assert!(report.is_passing());
        assert!(report.warning_count() > 0);
    }

    #[test]
    fn test_project_gate_field_requirements() {
        let report = project_gate(&ProjectFields::default());
        assert_eq!(report.error_count(), 2);

        let fields = ProjectFields {
            name: "Acme".to_string(),
            description: "Support agents for Acme".to_string(),
            kind: ProjectKind::Support,
        };
        assert!(project_gate(&fields).is_passing());
    }

    #[test]
    fn test_agent_gate_temperature_bounds() {
        let mut fields = AgentFields {
            name: "Helper".to_string(),
            system_prompt: "You are helpful.".to_string(),
            ..AgentFields::default()
        };
        assert!(agent_gate(&fields).is_passing());

        fields.temperature = 1.0;
        assert!(agent_gate(&fields).is_passing());

        fields.temperature = 1.01;
        assert!(!agent_gate(&fields).is_passing());

        fields.temperature = -0.1;
        assert!(!agent_gate(&fields).is_passing());
    }

    #[test]
    fn test_agent_gate_requires_prompt() {
        let fields = AgentFields {
            name: "Helper".to_string(),
            ..AgentFields::default()
        };
        let report = agent_gate(&fields);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].subject, "agent.system_prompt");
    }
}

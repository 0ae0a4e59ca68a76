//! Wizard Session
//!
//! The single owned value holding everything the wizard collects. No ambient
//! globals: callers construct a session, thread it through their flow, and
//! multiple independent sessions can coexist.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bundle::slug;
use crate::config::{AgentFields, ProjectFields};
use crate::types::{DocumentId, ForgeError, KnowledgeDocument, Result, ValidationReport};

use super::gates;
use super::step::WizardStep;

/// A generated descriptor binding one knowledge document to an invocable
/// tool identifier. Never hand-edited: regenerated from the document set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTool {
    pub tool_id: String,
    pub source_id: DocumentId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardSession {
    step: WizardStep,
    documents: Vec<KnowledgeDocument>,
    project: ProjectFields,
    agent: AgentFields,
    /// Always the same length and order as `documents`
    derived_tools: Vec<DerivedTool>,
}

impl WizardSession {
    /// Start a fresh session at the first step with empty collections
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    // =========================================================================
    // Knowledge Documents
    // =========================================================================

    pub fn documents(&self) -> &[KnowledgeDocument] {
        &self.documents
    }

    pub fn document(&self, id: &DocumentId) -> Option<&KnowledgeDocument> {
        self.documents.iter().find(|d| &d.id == id)
    }

    /// Add a knowledge base. Insertion order is preserved: it drives the
    /// KB numbering in generated filenames.
    pub fn add_document(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> DocumentId {
        let doc = KnowledgeDocument::new(name, content);
        let id = doc.id.clone();
        debug!("added knowledge base '{}' ({})", doc.name, id);
        self.documents.push(doc);
        self.regenerate_tools();
        id
    }

    /// Replace a document's content
    pub fn update_content(&mut self, id: &DocumentId, content: impl Into<String>) -> Result<()> {
        let doc = self.document_mut(id)?;
        doc.set_content(content);
        self.regenerate_tools();
        Ok(())
    }

    /// Rename a document; its tool id and filename follow the new name
    pub fn rename_document(&mut self, id: &DocumentId, name: impl Into<String>) -> Result<()> {
        let doc = self.document_mut(id)?;
        doc.set_name(name);
        self.regenerate_tools();
        Ok(())
    }

    /// Remove a document from the session
    pub fn remove_document(&mut self, id: &DocumentId) -> Result<()> {
        let before = self.documents.len();
        self.documents.retain(|d| &d.id != id);
        if self.documents.len() == before {
            return Err(ForgeError::Precondition(format!(
                "unknown document id: {}",
                id
            )));
        }
        self.regenerate_tools();
        Ok(())
    }

    fn document_mut(&mut self, id: &DocumentId) -> Result<&mut KnowledgeDocument> {
        self.documents
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| ForgeError::Precondition(format!("unknown document id: {}", id)))
    }

    // =========================================================================
    // Configuration Fields
    // =========================================================================

    pub fn project(&self) -> &ProjectFields {
        &self.project
    }

    pub fn set_project(&mut self, fields: ProjectFields) {
        self.project = fields;
    }

    pub fn agent(&self) -> &AgentFields {
        &self.agent
    }

    pub fn set_agent(&mut self, fields: AgentFields) {
        self.agent = fields;
    }

    pub fn derived_tools(&self) -> &[DerivedTool] {
        &self.derived_tools
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Run the current step's gate and, on a passing report, move forward.
    ///
    /// A failing gate leaves the step unchanged and returns the full report
    /// inside `ValidationFailed`; the session stays editable. Advancing from
    /// the terminal Review step is a no-op.
    pub fn advance(&mut self) -> Result<WizardStep> {
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };

        let report = self.gate_report();
        if !report.is_passing() {
            return Err(ForgeError::validation_failed(
                self.step.index(),
                self.step.name(),
                report,
            ));
        }

        self.step = next;
        debug!("advanced to step {} ({})", next.index(), next.name());
        if next == WizardStep::Tools {
            self.regenerate_tools();
        }
        Ok(self.step)
    }

    /// Move back one step. Never validates: backward movement is always
    /// allowed, clamped at the first step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            debug!("retreated to step {} ({})", prev.index(), prev.name());
        }
        self.step
    }

    /// Jump to a previously visited step, or gate into the next one.
    ///
    /// Indices at or below the current step are always allowed; exactly one
    /// step ahead delegates to `advance()`. Anything else is an
    /// `InvalidTransition` (a caller bug, not a data error).
    pub fn jump_to(&mut self, index: usize) -> Result<WizardStep> {
        let current = self.step.index();
        let Some(target) = WizardStep::from_index(index) else {
            return Err(ForgeError::invalid_transition(current, index));
        };

        if index <= current {
            self.step = target;
            Ok(self.step)
        } else if index == current + 1 {
            self.advance()
        } else {
            Err(ForgeError::invalid_transition(current, index))
        }
    }

    /// Restore the initial empty state at step 0, unconditionally
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::new();
    }

    /// The current step's gate report, without moving
    pub fn gate_report(&self) -> ValidationReport {
        match self.step {
            WizardStep::KnowledgeBases => gates::knowledge_gate(&self.documents),
            WizardStep::Project => gates::project_gate(&self.project),
            WizardStep::Agent => gates::agent_gate(&self.agent),
            // Derived and terminal steps have nothing user-edited to check.
            WizardStep::Tools | WizardStep::Review => ValidationReport::new(),
        }
    }

    /// Regenerate `derived_tools` from the document set, keeping length and
    /// relative order identical to `documents`.
    fn regenerate_tools(&mut self) {
        let names: Vec<&str> = self.documents.iter().map(|d| d.name.as_str()).collect();
        self.derived_tools = slug::unique_tool_ids(names)
            .into_iter()
            .zip(&self.documents)
            .map(|(tool_id, doc)| DerivedTool {
                tool_id,
                source_id: doc.id.clone(),
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectKind;

    fn valid_project() -> ProjectFields {
        ProjectFields {
            name: "Acme".to_string(),
            description: "Acme agents".to_string(),
            kind: ProjectKind::Support,
        }
    }

    fn valid_agent() -> AgentFields {
        AgentFields {
            name: "Helper".to_string(),
            system_prompt: "You are helpful.".to_string(),
            ..AgentFields::default()
        }
    }

    #[test]
    fn test_empty_session_cannot_advance() {
        let mut session = WizardSession::new();
        let err = session.advance().expect_err("gate should block");
        assert!(err.is_gate_failure());
        assert!(err.report().is_some_and(|r| r.error_count() >= 1));
        assert_eq!(session.current_step(), WizardStep::KnowledgeBases);
    }

    #[test]
    fn test_warnings_do_not_block_advance() {
        // 5 characters, no heading: warnings only, so the gate passes.
        let mut session = WizardSession::new();
        session.add_document("Policy", "short");
        assert_eq!(
            session.advance().expect("warnings never block"),
            WizardStep::Project
        );
    }

    #[test]
    fn test_oversized_document_blocks_with_exact_overage() {
        let mut session = WizardSession::new();
        session.add_document("Big", "x".repeat(20_000));
        let err = session.advance().expect_err("size gate should block");
        let report = err.report().expect("carries report");
        assert_eq!(report.error_count(), 1);
        assert!(report.errors[0].message.contains("2000"));
        assert_eq!(session.current_step(), WizardStep::KnowledgeBases);
    }

    #[test]
    fn test_retreat_never_validates() {
        let mut session = WizardSession::new();
        session.add_document("Policy", "# Policy\n\nfine");
        session.advance().expect("kb gate");

        // Invalidate the step being left: retreat must still work.
        assert_eq!(session.retreat(), WizardStep::KnowledgeBases);
        assert_eq!(session.retreat(), WizardStep::KnowledgeBases);
    }

    #[test]
    fn test_jump_backward_always_allowed() {
        let mut session = WizardSession::new();
        session.add_document("Policy", "# Policy\n\nfine");
        session.advance().expect("kb gate");
        session.set_project(valid_project());
        session.advance().expect("project gate");

        assert_eq!(session.jump_to(0).expect("backward jump"), WizardStep::KnowledgeBases);
        assert_eq!(session.current_step(), WizardStep::KnowledgeBases);
    }

    #[test]
    fn test_jump_forward_by_one_is_gated() {
        let mut session = WizardSession::new();
        let err = session.jump_to(1).expect_err("gate should run");
        assert!(err.is_gate_failure());

        session.add_document("Policy", "# Policy\n\nfine");
        assert_eq!(session.jump_to(1).expect("gated jump"), WizardStep::Project);
    }

    #[test]
    fn test_arbitrary_forward_jump_rejected() {
        let mut session = WizardSession::new();
        session.add_document("Policy", "# Policy\n\nfine");

        let err = session.jump_to(3).expect_err("skip not allowed");
        assert!(matches!(
            err,
            ForgeError::InvalidTransition { from: 0, to: 3 }
        ));
        assert_eq!(session.current_step(), WizardStep::KnowledgeBases);

        let err = session.jump_to(9).expect_err("out of range");
        assert!(matches!(err, ForgeError::InvalidTransition { to: 9, .. }));
    }

    #[test]
    fn test_advance_from_review_is_noop() {
        let mut session = complete_session();
        assert_eq!(session.current_step(), WizardStep::Review);
        assert_eq!(session.advance().expect("noop"), WizardStep::Review);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = complete_session();
        session.reset();
        assert_eq!(session.current_step(), WizardStep::KnowledgeBases);
        assert!(session.documents().is_empty());
        assert!(session.derived_tools().is_empty());
        assert!(session.project().name.is_empty());
    }

    #[test]
    fn test_derived_tools_track_documents() {
        let mut session = WizardSession::new();
        let first = session.add_document("Customer Segmentation & Targeting", "# A\n\nbody");
        session.add_document("Refund Policy", "# B\n\nbody");

        assert_eq!(session.derived_tools().len(), 2);
        assert_eq!(
            session.derived_tools()[0].tool_id,
            "kb_customer_segmentation_targeting"
        );
        assert_eq!(session.derived_tools()[1].tool_id, "kb_refund_policy");
        assert_eq!(session.derived_tools()[0].source_id, first);

        session.remove_document(&first).expect("remove");
        assert_eq!(session.derived_tools().len(), 1);
        assert_eq!(session.derived_tools()[0].tool_id, "kb_refund_policy");
    }

    #[test]
    fn test_rename_regenerates_tool_id() {
        let mut session = WizardSession::new();
        let id = session.add_document("Old Name", "# Doc\n\nbody");
        session.rename_document(&id, "New Name").expect("rename");
        assert_eq!(session.derived_tools()[0].tool_id, "kb_new_name");
    }

    #[test]
    fn test_unknown_document_id_fails_fast() {
        let mut session = WizardSession::new();
        let ghost = DocumentId::new("ghost");
        assert!(matches!(
            session.update_content(&ghost, "x"),
            Err(ForgeError::Precondition(_))
        ));
        assert!(matches!(
            session.remove_document(&ghost),
            Err(ForgeError::Precondition(_))
        ));
    }

    #[test]
    fn test_full_walkthrough_reaches_review() {
        let session = complete_session();
        assert_eq!(session.current_step(), WizardStep::Review);
        assert_eq!(session.derived_tools().len(), session.documents().len());
    }

    fn complete_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.add_document("Billing FAQ", "# Billing\n\nHow billing works.");
        session.advance().expect("kb gate");
        session.set_project(valid_project());
        session.advance().expect("project gate");
        session.set_agent(valid_agent());
        session.advance().expect("agent gate");
        session.advance().expect("tools always pass");
        session
    }
}

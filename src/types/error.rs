//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (ForgeError) for the entire application
//! - Rule-level findings are report entries, never errors: the validator
//!   does not throw for malformed Markdown
//! - Wizard control-flow signals (`ValidationFailed`, `InvalidTransition`)
//!   carry enough context for the caller to present and recover
//! - No panic/unwrap - all errors are recoverable

use thiserror::Error;

use super::report::ValidationReport;

#[derive(Debug, Error)]
pub enum ForgeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Wizard Control-Flow Signals
    // -------------------------------------------------------------------------
    /// A validation gate reported errors; the step index is unchanged and
    /// the session remains editable. Carries the full diagnostic report.
    #[error("validation failed at step {} ({}): {} error(s)", .step, .step_name, .report.error_count())]
    ValidationFailed {
        step: usize,
        step_name: String,
        report: ValidationReport,
    },

    /// A disallowed or out-of-range step jump. Indicates a caller bug in
    /// the driving UI/CLI, not a data error.
    #[error("invalid transition: step {from} -> step {to}")]
    InvalidTransition { from: usize, to: usize },

    /// Collaborator contract breach (unknown document id, missing required
    /// call argument). Fails fast rather than attempting recovery.
    #[error("precondition violated: {0}")]
    Precondition(String),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, ForgeError>;

// =============================================================================
// Helper Constructors
// =============================================================================

impl ForgeError {
    /// Create a validation-failed signal for a wizard step
    pub fn validation_failed(
        step: usize,
        step_name: impl Into<String>,
        report: ValidationReport,
    ) -> Self {
        Self::ValidationFailed {
            step,
            step_name: step_name.into(),
            report,
        }
    }

    /// Create an invalid-transition signal
    pub fn invalid_transition(from: usize, to: usize) -> Self {
        Self::InvalidTransition { from, to }
    }

    /// Extract the diagnostic report from a validation-failed signal
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::ValidationFailed { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Check if this error is a recoverable gate failure (fix input, retry)
    /// as opposed to a caller bug or system error
    pub fn is_gate_failure(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}

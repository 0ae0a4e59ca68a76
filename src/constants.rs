//! Global Constants
//!
//! Centralized constants for validation limits and tuning.
//! All magic numbers should be defined here with documentation.

/// Knowledge document content limits
pub mod limits {
    /// Hard ceiling on document content length (characters).
    /// Documents over this limit fail validation.
    pub const MAX_CONTENT_CHARS: usize = 18_000;

    /// Warning band starts at 90% of the ceiling.
    pub const WARN_CONTENT_CHARS: usize = 16_200;

    /// Documents under this length get a "very little content" warning.
    pub const MIN_CONTENT_CHARS: usize = 100;

    /// Non-ASCII character count above which an advisory note is emitted.
    pub const NON_ASCII_NOTE_THRESHOLD: usize = 100;
}

/// Cross-document duplicate detection
pub mod duplicates {
    /// Paragraphs at or below this length are excluded from duplicate
    /// detection. Short boilerplate and headers repeat legitimately.
    pub const MIN_PARAGRAPH_CHARS: usize = 100;
}

/// Agent configuration defaults
pub mod agent {
    /// Default sampling temperature for a newly configured agent.
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;

    /// Temperature must stay within [0.0, MAX_TEMPERATURE].
    pub const MAX_TEMPERATURE: f32 = 1.0;

    /// Default cap on tool-invocation rounds per agent turn.
    pub const DEFAULT_MAX_TOOL_ITERATIONS: u32 = 5;
}

/// Export bundle layout
pub mod export {
    /// Prefix for derived tool identifiers.
    pub const TOOL_ID_PREFIX: &str = "kb_";

    /// Filename of the structured bundle manifest.
    pub const MANIFEST_FILE: &str = "agent-config.json";
}

//! Wizard Steps
//!
//! The fixed linear sequence of configuration steps. No branching: forward
//! movement is gated, backward movement is free.

use serde::{Deserialize, Serialize};

/// Step identifier, numbered 0-4 to match the collection order:
/// - 0: KnowledgeBases - attach and validate knowledge documents
/// - 1: Project - project name, description, type
/// - 2: Agent - model, temperature, system prompt
/// - 3: Tools - derived tool descriptors, confirmation only
/// - 4: Review - terminal step, bundle assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    KnowledgeBases = 0,
    Project = 1,
    Agent = 2,
    Tools = 3,
    Review = 4,
}

impl WizardStep {
    /// Total number of steps
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::KnowledgeBases => "Knowledge Bases",
            Self::Project => "Project",
            Self::Agent => "Agent",
            Self::Tools => "Tools",
            Self::Review => "Review",
        }
    }

    /// Create from a 0-based step index
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::KnowledgeBases),
            1 => Some(Self::Project),
            2 => Some(Self::Agent),
            3 => Some(Self::Tools),
            4 => Some(Self::Review),
            _ => None,
        }
    }

    /// The following step, or `None` at the terminal step
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` at the first step
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Review is terminal: advancing from it is a no-op
    pub fn is_terminal(self) -> bool {
        self == Self::Review
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

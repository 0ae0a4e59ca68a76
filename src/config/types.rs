//! Configuration Types
//!
//! Typed field sets collected by the wizard, plus the seed configuration the
//! CLI loads to drive a session non-interactively.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::agent;
use crate::types::{ForgeError, Result};

// =============================================================================
// Project Fields
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFields {
    /// Display name for the deployed project
    pub name: String,

    /// Short description shown in the hosting platform
    pub description: String,

    /// Project domain
    #[serde(rename = "type")]
    pub kind: ProjectKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Marketing,
    Support,
    Sales,
    Research,
    #[default]
    Custom,
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectKind::Marketing => write!(f, "marketing"),
            ProjectKind::Support => write!(f, "support"),
            ProjectKind::Sales => write!(f, "sales"),
            ProjectKind::Research => write!(f, "research"),
            ProjectKind::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for ProjectKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "marketing" => Ok(ProjectKind::Marketing),
            "support" => Ok(ProjectKind::Support),
            "sales" => Ok(ProjectKind::Sales),
            "research" => Ok(ProjectKind::Research),
            "custom" => Ok(ProjectKind::Custom),
            _ => Err(format!(
                "Unknown project type: {}. Valid values: marketing, support, sales, research, custom",
                s
            )),
        }
    }
}

// =============================================================================
// Agent Fields
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentFields {
    /// Agent display name
    pub name: String,

    /// Model capability profile
    pub model: ModelProfile,

    /// Sampling temperature, [0.0, 1.0]
    pub temperature: f32,

    /// System prompt establishing the agent's role
    pub system_prompt: String,

    /// Cap on tool-invocation rounds per turn; non-negative by construction
    pub max_tool_iterations: u32,
}

impl Default for AgentFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            model: ModelProfile::default(),
            temperature: agent::DEFAULT_TEMPERATURE,
            system_prompt: String::new(),
            max_tool_iterations: agent::DEFAULT_MAX_TOOL_ITERATIONS,
        }
    }
}

/// Model capability profile resolved to a concrete model by the
/// deployment pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelProfile {
    /// Cheapest, lowest-latency tier
    Fast,
    /// Balanced tier (default)
    #[default]
    Balanced,
    /// Most capable tier for complex reasoning
    Deep,
}

impl std::fmt::Display for ModelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelProfile::Fast => write!(f, "fast"),
            ModelProfile::Balanced => write!(f, "balanced"),
            ModelProfile::Deep => write!(f, "deep"),
        }
    }
}

impl std::str::FromStr for ModelProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(ModelProfile::Fast),
            "balanced" => Ok(ModelProfile::Balanced),
            "deep" => Ok(ModelProfile::Deep),
            _ => Err(format!(
                "Unknown model profile: {}. Valid values: fast, balanced, deep",
                s
            )),
        }
    }
}

// =============================================================================
// Seed Configuration
// =============================================================================

/// A knowledge document referenced from the seed config by file path
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeSource {
    /// Display title for the document
    pub name: String,
    /// Path to the Markdown file, relative to the config file's directory
    pub path: PathBuf,
}

/// Everything needed to drive a wizard session non-interactively
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Configuration version
    pub version: String,

    pub project: ProjectFields,

    pub agent: AgentFields,

    /// Knowledge documents, in the order they should be numbered
    pub knowledge: Vec<KnowledgeSource>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            project: ProjectFields::default(),
            agent: AgentFields::default(),
            knowledge: Vec::new(),
        }
    }
}

impl SeedConfig {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ForgeError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=agent::MAX_TEMPERATURE).contains(&self.agent.temperature) {
            return Err(ForgeError::Config(format!(
                "Agent temperature must be between 0.0 and {}, got {}",
                agent::MAX_TEMPERATURE,
                self.agent.temperature
            )));
        }

        for source in &self.knowledge {
            if source.name.trim().is_empty() {
                return Err(ForgeError::Config(format!(
                    "Knowledge source '{}' has no name",
                    source.path.display()
                )));
            }
            if source.path.as_os_str().is_empty() {
                return Err(ForgeError::Config(format!(
                    "Knowledge source '{}' has no path",
                    source.name
                )));
            }
        }

        Ok(())
    }

    /// A populated starter config for `init` to write out
    pub fn sample(project_name: &str) -> Self {
        Self {
            project: ProjectFields {
                name: project_name.to_string(),
                description: "Describe what this agent project is for".to_string(),
                kind: ProjectKind::Custom,
            },
            agent: AgentFields {
                name: format!("{} Assistant", project_name),
                system_prompt: "You are a helpful domain assistant. Answer using the \
                                attached knowledge bases."
                    .to_string(),
                ..AgentFields::default()
            },
            knowledge: vec![KnowledgeSource {
                name: "Getting Started".to_string(),
                path: PathBuf::from("kb/getting_started.md"),
            }],
            ..SeedConfig::default()
        }
    }
}

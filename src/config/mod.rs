pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use types::{
    AgentFields, KnowledgeSource, ModelProfile, ProjectFields, ProjectKind, SeedConfig,
};

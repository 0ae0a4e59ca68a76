//! Configuration Loader (Figment-based)
//!
//! Loads and merges the seed configuration from multiple sources:
//! 1. Built-in defaults (Serialized)
//! 2. Config file (agentforge.toml)
//! 3. Environment variables (AGENTFORGE_* prefix)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use tracing::debug;

use super::types::SeedConfig;
use crate::types::{ForgeError, Result};

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "agentforge.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → file → env vars
    pub fn load(path: &Path) -> Result<SeedConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(SeedConfig::default()));

        if path.exists() {
            debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // e.g. AGENTFORGE_AGENT_TEMPERATURE -> agent.temperature
        figment = figment.merge(Env::prefixed("AGENTFORGE_").split('_').lowercase(true));

        let config: SeedConfig = figment
            .extract()
            .map_err(|e| ForgeError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only, no env merging
    pub fn load_from_file(path: &Path) -> Result<SeedConfig> {
        let config: SeedConfig = Figment::new()
            .merge(Serialized::defaults(SeedConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ForgeError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve knowledge source paths relative to the config file's directory
    pub fn resolve_source_path(config_path: &Path, source_path: &Path) -> PathBuf {
        if source_path.is_absolute() {
            return source_path.to_path_buf();
        }
        config_path
            .parent()
            .map(|dir| dir.join(source_path))
            .unwrap_or_else(|| source_path.to_path_buf())
    }
}

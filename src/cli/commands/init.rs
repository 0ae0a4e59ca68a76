//! Init Command
//!
//! Write a starter config and sample knowledge base into the current
//! directory.

use std::fs;
use std::path::Path;

use crate::config::{DEFAULT_CONFIG_FILE, SeedConfig};
use crate::types::{ForgeError, Result};

const SAMPLE_KB: &str = "\
# Getting Started

Describe one topic per knowledge base. The deployment pipeline turns each
file into a retrieval tool the agent can invoke.

- Start with a heading
- Keep each file under 18,000 characters
- Close every code fence you open
";

pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        return Err(ForgeError::Config(
            "Already initialized. Use --force to overwrite.".to_string(),
        ));
    }

    let project_name = std::env::current_dir()?
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string();

    let sample = SeedConfig::sample(&project_name);
    let rendered = toml::to_string_pretty(&sample)
        .map_err(|e| ForgeError::Config(format!("Failed to render config: {}", e)))?;
    fs::write(config_path, rendered)?;

    let kb_dir = Path::new("kb");
    fs::create_dir_all(kb_dir)?;
    let sample_kb = kb_dir.join("getting_started.md");
    if !sample_kb.exists() {
        fs::write(&sample_kb, SAMPLE_KB)?;
    }

    println!("✓ Initialized agentforge in {}", DEFAULT_CONFIG_FILE);
    println!("  Project: {}", project_name);
    println!();
    println!("Next steps:");
    println!("  1. Put your knowledge bases under kb/ and list them in {}", DEFAULT_CONFIG_FILE);
    println!("  2. Run 'agentforge validate kb' to check them");
    println!("  3. Run 'agentforge export' to assemble the deployment bundle");

    Ok(())
}

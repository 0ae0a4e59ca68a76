//! Export Command
//!
//! Drives a wizard session end-to-end from the seed config and writes the
//! deployment bundle: every gate runs exactly as an interactive caller would
//! hit it, and the first failing gate aborts with its full report.

use std::fs;
use std::path::Path;

use console::style;

use crate::bundle::{BundleWriter, ExportBundle};
use crate::config::ConfigLoader;
use crate::types::{Result, Severity};
use crate::validator::Reporter;
use crate::wizard::WizardSession;

pub fn run(config_path: &Path, output: &Path) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;

    let mut session = WizardSession::new();
    session.set_project(config.project.clone());
    session.set_agent(config.agent.clone());

    for source in &config.knowledge {
        let path = ConfigLoader::resolve_source_path(config_path, &source.path);
        let bytes = fs::read(&path)?;
        session.add_document(source.name.as_str(), String::from_utf8_lossy(&bytes));
    }

    println!(
        "Assembling bundle for '{}' ({} knowledge base(s))",
        config.project.name,
        session.documents().len()
    );
    println!();

    while !session.current_step().is_terminal() {
        let leaving = session.current_step();
        match session.advance() {
            Ok(entered) => {
                println!(
                    "{} {} -> {}",
                    style("✓").green(),
                    leaving.name(),
                    entered.name()
                );
            }
            Err(err) => {
                if let Some(report) = err.report() {
                    Reporter::print_report(leaving.name(), report, Severity::Info);
                }
                return Err(err);
            }
        }
    }

    let bundle = ExportBundle::from_session(&session);
    let writer = BundleWriter::new(output);
    let written = writer.write(&bundle)?;

    println!();
    println!("{} Bundle written to {}", style("✓").green(), output.display());
    for path in &written {
        println!("  {}", path.display());
    }
    println!(
        "  {} tool(s): {}",
        bundle.tools.len(),
        bundle
            .tools
            .iter()
            .map(|t| t.tool_id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}

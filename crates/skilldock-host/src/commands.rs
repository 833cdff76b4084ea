//! Subcommand implementations for the host CLI

use crate::config::Config;
use anyhow::{bail, Result};
use skilldock_guidance::{ActivationReason, GuidanceRegistry};
use tracing::debug;

/// Build a registry with the directories the host config names
fn configured_registry(config: &Config) -> GuidanceRegistry {
    let mut registry = GuidanceRegistry::new();
    if config.guidance.personal {
        registry = registry.with_personal_entries();
    }
    if config.guidance.project {
        registry = registry.with_project_entries();
    }
    for dir in &config.guidance.directories {
        registry = registry.add_directory(dir);
    }
    registry
}

/// Configured registry with discovery already run
fn build_registry(config: &Config) -> Result<GuidanceRegistry> {
    let mut registry = configured_registry(config);
    registry.discover()?;
    debug!("registry ready with {} entries", registry.len());
    Ok(registry)
}

/// `match`: print the entries that activate for the given context
///
/// An empty activation set is a normal outcome and still exits 0.
pub fn run_match(config: &Config, context: &str, json: bool, full: bool) -> Result<()> {
    let mut registry = build_registry(config)?;
    let activations = registry.activate(context);

    if json {
        println!("{}", serde_json::to_string_pretty(&activations)?);
    } else if activations.is_empty() {
        eprintln!("no guidance activated");
    } else {
        for activation in &activations {
            match &activation.reason {
                ActivationReason::Trigger(trigger) => {
                    println!("{}  (trigger: {trigger})", activation.name);
                }
                ActivationReason::Invocation => {
                    println!("{}  (explicit invocation)", activation.name);
                }
            }
        }
    }

    if full {
        for activation in &activations {
            let entry = registry.load_entry(&activation.name)?;
            if let Some(body) = &entry.body {
                println!("\n--- {} ---\n{body}", activation.name);
            }
        }
    }

    Ok(())
}

/// `list`: print the installed guidance catalog
pub fn run_list(config: &Config) -> Result<()> {
    let registry = build_registry(config)?;
    if registry.is_empty() {
        println!("No guidance entries installed");
    } else {
        print!("{}", registry.catalog_summary());
    }
    Ok(())
}

/// `show`: print the full document body for one entry
pub fn run_show(config: &Config, name: &str) -> Result<()> {
    let mut registry = build_registry(config)?;
    let entry = registry.load_entry(name)?;
    if let Some(body) = &entry.body {
        print!("{body}");
    }
    Ok(())
}

/// `check`: validate every configured directory and fail on findings
pub fn run_check(config: &Config) -> Result<()> {
    let registry = configured_registry(config);
    let findings = registry.lint();

    if findings.is_empty() {
        println!("all guidance entries are valid");
        return Ok(());
    }

    for (path, error) in &findings {
        eprintln!("{}: {error}", path.display());
    }
    bail!("{} invalid guidance entries", findings.len());
}

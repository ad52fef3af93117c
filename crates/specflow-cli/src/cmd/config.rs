use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use specflow_core::config::{SpecConfig, WarnLevel};
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the workflow configuration
    Show,

    /// Validate the config for common mistakes
    Validate,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = SpecConfig::load(root).context("failed to load spec-config.json")?;
    if json {
        return print_json(&config);
    }

    let wf = &config.spec_workflow;
    println!("version:                     {}", wf.version);
    println!("auto_create_directories:     {}", wf.auto_create_directories);
    println!("auto_reference_requirements: {}", wf.auto_reference_requirements);
    println!("enforce_approval_workflow:   {}", wf.enforce_approval_workflow);
    println!("default_feature_prefix:      {}", wf.default_feature_prefix);
    println!("supported_formats:           {}", wf.supported_formats.join(", "));
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = SpecConfig::load(root).context("failed to load spec-config.json")?;
    let warnings = config.validate();

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}

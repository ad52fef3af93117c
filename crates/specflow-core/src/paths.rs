use crate::error::{Result, SpecError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CLAUDE_DIR: &str = ".claude";
pub const COMMANDS_DIR: &str = ".claude/commands";
pub const SPECS_DIR: &str = ".claude/specs";
pub const TEMPLATES_DIR: &str = ".claude/templates";

pub const CONFIG_FILE: &str = ".claude/spec-config.json";
pub const CLAUDE_MD: &str = "CLAUDE.md";

pub const TASKS_FILE: &str = "tasks.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn claude_dir(root: &Path) -> PathBuf {
    root.join(CLAUDE_DIR)
}

pub fn commands_dir(root: &Path) -> PathBuf {
    root.join(COMMANDS_DIR)
}

pub fn specs_dir(root: &Path) -> PathBuf {
    root.join(SPECS_DIR)
}

pub fn templates_dir(root: &Path) -> PathBuf {
    root.join(TEMPLATES_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn claude_md_path(root: &Path) -> PathBuf {
    root.join(CLAUDE_MD)
}

pub fn spec_dir(root: &Path, spec: &str) -> PathBuf {
    specs_dir(root).join(spec)
}

pub fn tasks_path(root: &Path, spec: &str) -> PathBuf {
    spec_dir(root, spec).join(TASKS_FILE)
}

/// Directory holding the generated per-task commands of one spec.
pub fn spec_commands_dir(root: &Path, spec: &str) -> PathBuf {
    commands_dir(root).join(spec)
}

// ---------------------------------------------------------------------------
// Spec name validation
// ---------------------------------------------------------------------------

static SPEC_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn spec_name_re() -> &'static Regex {
    SPEC_NAME_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").expect("valid regex")
    })
}

/// Spec names become directory names and slash-command prefixes, so they are
/// restricted to kebab-case slugs.
pub fn validate_spec_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > 64 || !spec_name_re().is_match(name) {
        return Err(SpecError::InvalidSpecName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

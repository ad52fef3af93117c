use crate::error::{Result, SpecError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

pub const KNOWN_FORMATS: &[&str] = &["markdown", "mermaid"];

// ---------------------------------------------------------------------------
// WorkflowSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSettings {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_true")]
    pub auto_create_directories: bool,
    #[serde(default = "default_true")]
    pub auto_reference_requirements: bool,
    #[serde(default = "default_true")]
    pub enforce_approval_workflow: bool,
    #[serde(default = "default_feature_prefix")]
    pub default_feature_prefix: String,
    #[serde(default = "default_supported_formats")]
    pub supported_formats: Vec<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_true() -> bool {
    true
}

fn default_feature_prefix() -> String {
    "feature-".to_string()
}

fn default_supported_formats() -> Vec<String> {
    KNOWN_FORMATS.iter().map(|s| s.to_string()).collect()
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            auto_create_directories: true,
            auto_reference_requirements: true,
            enforce_approval_workflow: true,
            default_feature_prefix: default_feature_prefix(),
            supported_formats: default_supported_formats(),
        }
    }
}

// ---------------------------------------------------------------------------
// SpecConfig (top-level, `.claude/spec-config.json`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecConfig {
    #[serde(default)]
    pub spec_workflow: WorkflowSettings,
}

impl SpecConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        let data = crate::io::read_optional(&path)?.ok_or(SpecError::NotInitialized)?;
        let cfg: SpecConfig = serde_json::from_str(&data)?;
        Ok(cfg)
    }

    /// Like [`SpecConfig::load`], but a project without a config file gets the defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(SpecError::NotInitialized) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = self.to_json()?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Pretty-printed JSON, two-space indented.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let wf = &self.spec_workflow;

        if wf.version.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "spec_workflow.version is empty".to_string(),
            });
        }

        if wf.supported_formats.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "spec_workflow.supported_formats is empty".to_string(),
            });
        }
        for format in &wf.supported_formats {
            if !KNOWN_FORMATS.contains(&format.as_str()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("unknown format '{format}' in supported_formats"),
                });
            }
        }

        // The prefix is glued onto spec names, so it must keep them slug-shaped.
        let prefix = wf.default_feature_prefix.trim_end_matches('-');
        if !prefix.is_empty() && paths::validate_spec_name(prefix).is_err() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "default_feature_prefix '{}' would produce invalid spec names",
                    wf.default_feature_prefix
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("not initialized: run 'specflow init'")]
    NotInitialized,

    #[error("document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("invalid spec name '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSpecName(String),

    #[error("invalid task id '{0}': expected dot-separated integers such as 2 or 2.1")]
    InvalidTaskId(String),

    #[error("{} does not exist and auto_create_directories is disabled", .0.display())]
    DirectoryMissing(PathBuf),

    #[error("invalid artifact key: {0}")]
    InvalidKey(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpecError>;

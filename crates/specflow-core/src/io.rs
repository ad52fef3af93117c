use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Outcome of [`upsert`], used by callers to report `created:` / `updated:` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Upsert {
    Created,
    Updated,
    Unchanged,
}

impl Upsert {
    pub fn label(self) -> &'static str {
        match self {
            Upsert::Created => "created:",
            Upsert::Updated => "updated:",
            Upsert::Unchanged => "exists: ",
        }
    }
}

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting generated documents.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Read a UTF-8 file, mapping "not found" to `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write `data` to `path` unless the file already holds exactly these bytes.
pub fn upsert(path: &Path, data: &[u8]) -> Result<Upsert> {
    let outcome = match std::fs::read(path) {
        Ok(existing) if existing == data => return Ok(Upsert::Unchanged),
        Ok(_) => Upsert::Updated,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Upsert::Created,
        Err(e) => return Err(e.into()),
    };
    atomic_write(path, data)?;
    Ok(outcome)
}

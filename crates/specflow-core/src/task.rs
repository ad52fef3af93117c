//! Checklist parsing: turns a `tasks.md` document into addressable [`Task`] records.
//!
//! Only pending entries are extracted. A line qualifies when it looks like
//! `- [ ] 2.1 Create base model classes`; completed boxes, detail bullets,
//! headings and `_Requirements:` lines are skipped without error.

use crate::error::{Result, SpecError};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// TaskId
// ---------------------------------------------------------------------------

/// Hierarchical task identifier: one or more integers separated by single dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Parse an ID, accepting a single trailing dot (`"1."` becomes `"1"`).
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.strip_suffix('.').unwrap_or(raw);
        let well_formed = !trimmed.is_empty()
            && trimmed
                .split('.')
                .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(SpecError::InvalidTaskId(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// `1` has depth 1, `2.1` has depth 2.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// `2.1` → `2`; top-level IDs have no parent.
    pub fn parent(&self) -> Option<TaskId> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| TaskId(parent.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        TaskId::parse(s)
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub raw_line: String,
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

static TASK_LINE_RE: OnceLock<Regex> = OnceLock::new();

fn task_line_re() -> &'static Regex {
    // marker, empty box, numeric id with optional trailing dot, then
    // end-of-line or whitespace + description
    TASK_LINE_RE.get_or_init(|| {
        Regex::new(r"^\s*[-*+]\s*\[\s*\]\s*(\d+(?:\.\d+)*\.?)(?:\s+(.*?))?\s*$")
            .expect("valid regex")
    })
}

/// Parse a single line. Returns `None` for anything that is not a pending task.
pub fn parse_line(line: &str) -> Option<Task> {
    let caps = task_line_re().captures(line)?;
    let id = TaskId::parse(caps.get(1)?.as_str()).ok()?;
    let description = caps
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    Some(Task {
        id,
        description,
        raw_line: line.to_string(),
    })
}

/// Extract every pending task in document order.
///
/// Duplicate IDs are kept in the order they appear; de-duplication is left
/// to the caller.
pub fn extract(document: &str) -> Vec<Task> {
    document.lines().filter_map(parse_line).collect()
}

/// Read and extract a checklist document from disk.
///
/// A missing file is [`SpecError::DocumentNotFound`]; a file with no pending
/// tasks is an empty `Vec`, not an error.
pub fn load(path: &Path) -> Result<Vec<Task>> {
    let document = crate::io::read_optional(path)?
        .ok_or_else(|| SpecError::DocumentNotFound(path.to_path_buf()))?;
    let tasks = extract(&document);
    tracing::debug!(path = %path.display(), count = tasks.len(), "extracted tasks");
    Ok(tasks)
}

/// IDs that occur more than once, each reported once, in first-seen order.
pub fn duplicate_ids(tasks: &[Task]) -> Vec<TaskId> {
    let mut seen = std::collections::HashSet::new();
    let mut dups: Vec<TaskId> = Vec::new();
    for task in tasks {
        if !seen.insert(task.id.as_str()) && !dups.contains(&task.id) {
            dups.push(task.id.clone());
        }
    }
    dups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

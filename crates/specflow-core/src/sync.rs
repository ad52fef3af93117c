use crate::command::{self, ArtifactKey};
use crate::config::SpecConfig;
use crate::error::{Result, SpecError};
use crate::task::{self, Task, TaskId};
use crate::{io, paths};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One command file written during a sync run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCommand {
    pub key: ArtifactKey,
    pub slash_command: String,
    pub description: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub spec_name: String,
    pub tasks_file: PathBuf,
    pub output_dir: PathBuf,
    pub commands: Vec<GeneratedCommand>,
    /// IDs that appeared on more than one pending line; the last occurrence's
    /// command is the one left on disk.
    pub duplicate_ids: Vec<TaskId>,
}

/// Regenerate `.claude/commands/{spec}/task-{id}.md` for every pending task in
/// `.claude/specs/{spec}/tasks.md`.
///
/// Prior artifacts at the same key are replaced. Callers must not run two
/// syncs for the same spec concurrently.
pub fn generate_task_commands(root: &Path, spec_name: &str) -> Result<SyncReport> {
    paths::validate_spec_name(spec_name)?;
    let config = SpecConfig::load_or_default(root)?;

    let tasks_file = paths::tasks_path(root, spec_name);
    let tasks = task::load(&tasks_file)?;

    let output_dir = paths::spec_commands_dir(root, spec_name);
    if !output_dir.is_dir() {
        if !config.spec_workflow.auto_create_directories {
            return Err(SpecError::DirectoryMissing(output_dir));
        }
        io::ensure_dir(&output_dir)?;
    }

    let duplicate_ids = task::duplicate_ids(&tasks);
    for id in &duplicate_ids {
        tracing::warn!(spec = spec_name, task_id = %id, "duplicate task id in tasks.md");
    }

    let commands = tasks
        .iter()
        .map(|t| write_command(root, spec_name, t))
        .collect::<Result<Vec<_>>>()?;

    Ok(SyncReport {
        spec_name: spec_name.to_string(),
        tasks_file,
        output_dir,
        commands,
        duplicate_ids,
    })
}

fn write_command(root: &Path, spec_name: &str, task: &Task) -> Result<GeneratedCommand> {
    let cmd = command::synthesize(spec_name, task)?;
    let path = cmd.key.path(root);
    io::atomic_write(&path, cmd.content.as_bytes())?;
    tracing::info!(path = %path.display(), "wrote task command");
    Ok(GeneratedCommand {
        slash_command: cmd.key.slash_command(),
        key: cmd.key,
        description: task.description.clone(),
        path,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

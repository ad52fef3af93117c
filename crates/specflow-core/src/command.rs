//! Per-task command documents.
//!
//! Every pending task of a spec gets one markdown command under
//! `.claude/commands/{spec}/task-{id}.md`, exposed to the agent as
//! `/{spec}-task-{id}`. Rendering is pure; persisting is done by
//! [`crate::sync`].

use crate::error::{Result, SpecError};
use crate::task::{Task, TaskId};
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ArtifactKey
// ---------------------------------------------------------------------------

/// Identifies one synthesized command document. Unique per `(spec, task id)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArtifactKey {
    pub spec_name: String,
    pub task_id: TaskId,
}

impl ArtifactKey {
    pub fn new(spec_name: &str, task_id: &TaskId) -> Result<Self> {
        if spec_name.is_empty() {
            return Err(SpecError::InvalidKey("spec name is empty".to_string()));
        }
        if task_id.as_str().is_empty() {
            return Err(SpecError::InvalidKey("task id is empty".to_string()));
        }
        Ok(Self {
            spec_name: spec_name.to_string(),
            task_id: task_id.clone(),
        })
    }

    /// `task-2.1.md`
    pub fn file_name(&self) -> String {
        format!("task-{}.md", self.task_id)
    }

    /// `/user-auth-task-2.1`
    pub fn slash_command(&self) -> String {
        format!("/{}-task-{}", self.spec_name, self.task_id)
    }

    /// Location of the artifact relative to the project root.
    pub fn path(&self, root: &Path) -> PathBuf {
        crate::paths::spec_commands_dir(root, &self.spec_name).join(self.file_name())
    }
}

// ---------------------------------------------------------------------------
// TaskCommand
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCommand {
    pub key: ArtifactKey,
    pub content: String,
}

/// Render the command document for `task` within `spec_name`.
///
/// Identical inputs always produce byte-identical output.
pub fn synthesize(spec_name: &str, task: &Task) -> Result<TaskCommand> {
    let key = ArtifactKey::new(spec_name, &task.id)?;
    let content = render(&key, &task.description);
    Ok(TaskCommand { key, content })
}

fn render(key: &ArtifactKey, description: &str) -> String {
    let spec = &key.spec_name;
    let id = &key.task_id;
    let slash = key.slash_command();
    format!(
        "# {spec} - Task {id}\n\n\
        Execute task {id} for the {spec} specification.\n\n\
        ## Task Description\n\
        {description}\n\n\
        ## Usage\n\
        ```\n\
        {slash}\n\
        ```\n\n\
        ## Instructions\n\
        This command executes a specific task from the {spec} specification.\n\n\
        **Automatic Execution**: This command will automatically execute:\n\
        ```\n\
        /spec-execute {id} {spec}\n\
        ```\n\n\
        **Process**:\n\
        1. Load the {spec} specification context (requirements.md, design.md, tasks.md)\n\
        2. Execute task {id}: \"{description}\"\n\
        3. Follow all implementation guidelines from the main /spec-execute command\n\
        4. Mark the task as complete in tasks.md\n\
        5. Stop and wait for user review\n\n\
        **Important**: This command follows the same rules as /spec-execute:\n\
        - Execute ONLY this specific task\n\
        - Mark task as complete by changing [ ] to [x] in tasks.md\n\
        - Stop after completion and wait for user approval\n\
        - Do not automatically proceed to the next task\n\n\
        ## Next Steps\n\
        After task completion, you can:\n\
        - Review the implementation\n\
        - Run tests if applicable\n\
        - Execute the next task using /{spec}-task-[next-id]\n\
        - Check overall progress with /spec-status {spec}\n"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

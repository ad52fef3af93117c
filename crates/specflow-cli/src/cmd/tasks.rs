use crate::output::{print_json, print_table};
use anyhow::Context;
use serde::Serialize;
use specflow_core::{command::ArtifactKey, paths, task};
use std::path::Path;

#[derive(Serialize)]
struct PendingTask {
    id: String,
    depth: usize,
    parent: Option<String>,
    description: String,
    command: String,
}

pub fn run(root: &Path, spec: &str, json: bool) -> anyhow::Result<()> {
    paths::validate_spec_name(spec)?;
    let tasks_file = paths::tasks_path(root, spec);
    let tasks = task::load(&tasks_file)
        .with_context(|| format!("failed to read tasks for '{spec}'"))?;

    let pending = tasks
        .iter()
        .map(|t| {
            let key = ArtifactKey::new(spec, &t.id)?;
            Ok(PendingTask {
                id: t.id.to_string(),
                depth: t.id.depth(),
                parent: t.id.parent().map(|p| p.to_string()),
                description: t.description.clone(),
                command: key.slash_command(),
            })
        })
        .collect::<specflow_core::Result<Vec<_>>>()?;

    if json {
        return print_json(&pending);
    }

    if pending.is_empty() {
        println!("No pending tasks in {}", tasks_file.display());
        return Ok(());
    }

    let rows = pending
        .into_iter()
        .map(|p| vec![p.id, p.depth.to_string(), p.description, p.command])
        .collect();
    print_table(&["ID", "DEPTH", "DESCRIPTION", "COMMAND"], rows);
    Ok(())
}

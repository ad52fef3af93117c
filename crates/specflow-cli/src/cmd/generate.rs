use crate::output::print_json;
use anyhow::Context;
use specflow_core::sync;
use std::path::Path;

pub fn run(root: &Path, spec: &str, json: bool) -> anyhow::Result<()> {
    let report = sync::generate_task_commands(root, spec)
        .with_context(|| format!("failed to generate task commands for '{spec}'"))?;

    if json {
        return print_json(&report);
    }

    for id in &report.duplicate_ids {
        println!("warning: task {id} appears more than once in tasks.md; last occurrence wins");
    }

    if report.commands.is_empty() {
        println!("No pending tasks in {}", report.tasks_file.display());
        return Ok(());
    }

    let rel_dir = report
        .output_dir
        .strip_prefix(root)
        .unwrap_or(&report.output_dir);
    println!(
        "Generated {} task command{} in {}/",
        report.commands.len(),
        if report.commands.len() == 1 { "" } else { "s" },
        rel_dir.display()
    );
    for cmd in &report.commands {
        println!("  {} - {}", cmd.slash_command, cmd.description);
    }
    Ok(())
}

use super::init;
use crate::output::print_json;
use anyhow::Context;

/// Run the full setup in a fresh temporary directory and leave it behind
/// for inspection.
pub fn run(json: bool) -> anyhow::Result<()> {
    let dir = tempfile::Builder::new()
        .prefix("specflow-test-")
        .tempdir()
        .context("failed to create temporary directory")?;
    let path = dir.keep();

    if !json {
        println!("Testing setup in: {}", path.display());
    }
    let files = init::install(&path)
        .with_context(|| format!("setup failed in {}", path.display()))?;

    if json {
        return print_json(&serde_json::json!({
            "directory": path,
            "files": files,
        }));
    }

    println!("Test completed successfully: {} files written", files.len());
    println!("Test directory: {}", path.display());
    Ok(())
}

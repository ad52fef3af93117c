#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn specflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("specflow").unwrap();
    cmd.current_dir(dir.path()).env("SPECFLOW_ROOT", dir.path());
    cmd
}

fn init_project(dir: &TempDir) {
    specflow(dir).args(["init", "--yes"]).assert().success();
}

fn write_tasks(dir: &TempDir, spec: &str, body: &str) {
    let spec_dir = dir.path().join(".claude/specs").join(spec);
    std::fs::create_dir_all(&spec_dir).unwrap();
    std::fs::write(spec_dir.join("tasks.md"), body).unwrap();
}

const USER_AUTH_TASKS: &str = "# Implementation Plan\n\n\
- [ ] 1. Set up project structure\n  - Create directories\n  - _Requirements: 1.1_\n\n\
- [x] 2. Implement data models\n\
- [ ] 2.1 Create base model classes\n\
- [ ] 2.2 Implement specific model classes\n";

// ---------------------------------------------------------------------------
// specflow init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    specflow(&dir)
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created: CLAUDE.md"));

    for sub in [".claude/commands", ".claude/specs", ".claude/templates"] {
        assert!(dir.path().join(sub).is_dir(), "{sub} missing");
    }
    for name in [
        "spec-create",
        "spec-requirements",
        "spec-design",
        "spec-tasks",
        "spec-execute",
        "spec-status",
        "spec-list",
    ] {
        let path = dir.path().join(format!(".claude/commands/{name}.md"));
        assert!(path.exists(), "{name} missing");
    }
    for name in ["requirements", "design", "tasks"] {
        let path = dir.path().join(format!(".claude/templates/{name}-template.md"));
        assert!(path.exists(), "{name} template missing");
    }
    assert!(dir.path().join(".claude/spec-config.json").exists());
    assert!(dir.path().join("CLAUDE.md").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let first = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();

    specflow(&dir)
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:  CLAUDE.md"));

    let second = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.matches("# Spec Workflow").count(), 1);
}

#[test]
fn init_preserves_existing_claude_md() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("CLAUDE.md"),
        "# My Project\n\nThis is my existing project documentation.\n",
    )
    .unwrap();
    init_project(&dir);

    let content = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(content.starts_with("# My Project\n\nThis is my existing project documentation."));
    assert!(content.contains("\n\n---\n\n# Spec Workflow\n"));
}

#[test]
fn init_replaces_stale_section_and_keeps_neighbours() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("CLAUDE.md"),
        "# Intro\ntext\n\n# Spec Workflow\nstale instructions\n\n# Footer\nfoo\n",
    )
    .unwrap();
    init_project(&dir);

    let content = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(!content.contains("stale instructions"));
    assert!(content.starts_with("# Intro\ntext\n\n# Spec Workflow\n"));
    assert!(content.ends_with("\n\n# Footer\nfoo\n"));
}

#[test]
fn init_json_reports_files_and_project_types() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();

    let output = specflow(&dir)
        .args(["init", "--yes", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["project_types"], serde_json::json!(["Rust"]));
    assert_eq!(json["files"].as_array().unwrap().len(), 12);
    assert_eq!(json["files"][11]["path"], "CLAUDE.md");
    assert_eq!(json["files"][11]["outcome"], "created");
}

// ---------------------------------------------------------------------------
// specflow generate
// ---------------------------------------------------------------------------

#[test]
fn generate_writes_pending_task_commands() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_tasks(&dir, "user-auth", USER_AUTH_TASKS);

    specflow(&dir)
        .args(["generate", "user-auth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 3 task commands"))
        .stdout(predicate::str::contains(
            "/user-auth-task-2.1 - Create base model classes",
        ));

    let out = dir.path().join(".claude/commands/user-auth");
    assert!(out.join("task-1.md").exists());
    assert!(out.join("task-2.1.md").exists());
    assert!(out.join("task-2.2.md").exists());
    assert!(!out.join("task-2.md").exists());

    let content = std::fs::read_to_string(out.join("task-2.1.md")).unwrap();
    assert!(content.contains("/spec-execute 2.1 user-auth"));
}

#[test]
fn generate_without_init_uses_default_config() {
    let dir = TempDir::new().unwrap();
    write_tasks(&dir, "solo", "- [ ] 1. Only task\n");

    specflow(&dir).args(["generate", "solo"]).assert().success();
    assert!(dir.path().join(".claude/commands/solo/task-1.md").exists());
}

#[test]
fn generate_fails_when_tasks_missing() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    specflow(&dir)
        .args(["generate", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("document not found"));
    assert!(!dir.path().join(".claude/commands/ghost").exists());
}

#[test]
fn generate_rejects_path_like_spec_names() {
    let dir = TempDir::new().unwrap();
    specflow(&dir)
        .args(["generate", "../outside"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid spec name"));
}

#[test]
fn generate_json_report() {
    let dir = TempDir::new().unwrap();
    write_tasks(&dir, "dup", "- [ ] 1. First\n- [ ] 1. Second\n");

    let output = specflow(&dir)
        .args(["--json", "generate", "dup"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["spec_name"], "dup");
    assert_eq!(json["commands"].as_array().unwrap().len(), 2);
    assert_eq!(json["commands"][0]["slash_command"], "/dup-task-1");
    assert_eq!(json["duplicate_ids"], serde_json::json!(["1"]));
}

// ---------------------------------------------------------------------------
// specflow tasks
// ---------------------------------------------------------------------------

#[test]
fn tasks_lists_pending_tasks_as_table() {
    let dir = TempDir::new().unwrap();
    write_tasks(&dir, "user-auth", USER_AUTH_TASKS);

    specflow(&dir)
        .args(["tasks", "user-auth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID"))
        .stdout(predicate::str::contains("/user-auth-task-2.2"))
        .stdout(predicate::str::contains("Implement data models").not());

    assert!(!dir.path().join(".claude/commands").exists());
}

#[test]
fn tasks_json_includes_depth_and_parent() {
    let dir = TempDir::new().unwrap();
    write_tasks(&dir, "user-auth", USER_AUTH_TASKS);

    let output = specflow(&dir)
        .args(["tasks", "user-auth", "-j"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tasks = json.as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0]["id"], "1");
    assert_eq!(tasks[0]["depth"], 1);
    assert!(tasks[0]["parent"].is_null());
    assert_eq!(tasks[1]["id"], "2.1");
    assert_eq!(tasks[1]["depth"], 2);
    assert_eq!(tasks[1]["parent"], "2");
}

// ---------------------------------------------------------------------------
// specflow config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_passes_after_init() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    specflow(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_fails_on_empty_version() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(
        dir.path().join(".claude/spec-config.json"),
        r#"{"spec_workflow":{"version":""}}"#,
    )
    .unwrap();

    specflow(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"));
}

#[test]
fn config_show_requires_init() {
    let dir = TempDir::new().unwrap();
    specflow(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn config_show_prints_settings() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    specflow(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_feature_prefix:      feature-"));
}

// ---------------------------------------------------------------------------
// specflow test
// ---------------------------------------------------------------------------

#[test]
fn selftest_leaves_populated_directory() {
    let dir = TempDir::new().unwrap();
    let output = specflow(&dir).args(["test", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let path = std::path::PathBuf::from(json["directory"].as_str().unwrap());
    assert!(path.join("CLAUDE.md").exists());
    assert!(path.join(".claude/commands/spec-create.md").exists());
    std::fs::remove_dir_all(path).unwrap();
}

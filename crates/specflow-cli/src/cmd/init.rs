use crate::output::print_json;
use anyhow::Context;
use serde::Serialize;
use specflow_core::{
    config::SpecConfig,
    detect::{self, ProjectType},
    io::{self, Upsert},
    paths, section,
};
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Line that opens the managed section in CLAUDE.md.
pub const SPEC_WORKFLOW_MARKER: &str = "# Spec Workflow";

/// Workflow slash commands installed under `.claude/commands/`.
const WORKFLOW_COMMANDS: &[(&str, &str)] = &[
    ("spec-create.md", SPEC_CREATE_COMMAND),
    ("spec-requirements.md", SPEC_REQUIREMENTS_COMMAND),
    ("spec-design.md", SPEC_DESIGN_COMMAND),
    ("spec-tasks.md", SPEC_TASKS_COMMAND),
    ("spec-execute.md", SPEC_EXECUTE_COMMAND),
    ("spec-status.md", SPEC_STATUS_COMMAND),
    ("spec-list.md", SPEC_LIST_COMMAND),
];

/// Document templates installed under `.claude/templates/`.
const DOCUMENT_TEMPLATES: &[(&str, &str)] = &[
    ("requirements-template.md", REQUIREMENTS_TEMPLATE),
    ("design-template.md", DESIGN_TEMPLATE),
    ("tasks-template.md", TASKS_TEMPLATE),
];

#[derive(Debug, Serialize)]
pub struct WrittenFile {
    pub path: String,
    pub outcome: Upsert,
}

#[derive(Serialize)]
struct InitSummary<'a> {
    root: &'a Path,
    project_types: &'a [ProjectType],
    claude_available: bool,
    files: &'a [WrittenFile],
}

pub fn run(root: &Path, force: bool, yes: bool, json: bool) -> anyhow::Result<()> {
    let project_types = detect::detect_project_types(root);
    let claude_available = which::which("claude").is_ok();

    if !json {
        println!("Setting up spec workflow in: {}", root.display());
        if !project_types.is_empty() {
            let names: Vec<&str> = project_types.iter().map(|t| t.as_str()).collect();
            println!("  detected: {}", names.join(", "));
        }
        if !claude_available {
            println!("  warning: 'claude' not found on PATH; install Claude Code first");
            println!("           https://docs.anthropic.com/claude-code");
        }
    }
    if !claude_available {
        tracing::warn!("claude executable not found on PATH");
    }

    let interactive = !yes && std::io::stdin().is_terminal();

    if interactive
        && !force
        && paths::claude_dir(root).is_dir()
        && !confirm(".claude directory already exists. Overwrite?", false)?
    {
        println!("{}", cancelled_message(json)?);
        return Ok(());
    }

    if interactive {
        if !json {
            print_plan();
        }
        if !confirm("Proceed with setup?", true)? {
            println!("{}", cancelled_message(json)?);
            return Ok(());
        }
    }

    let files = install(root)?;

    if json {
        return print_json(&InitSummary {
            root,
            project_types: &project_types,
            claude_available,
            files: &files,
        });
    }

    for f in &files {
        println!("  {} {}", f.outcome.label(), f.path);
    }
    println!("\nSpec workflow installed.");
    print_next_steps();
    Ok(())
}

/// Write the `.claude/` scaffolding and merge the workflow section into
/// CLAUDE.md. Safe to re-run: unchanged files are left alone.
pub fn install(root: &Path) -> anyhow::Result<Vec<WrittenFile>> {
    for dir in [
        paths::claude_dir(root),
        paths::commands_dir(root),
        paths::specs_dir(root),
        paths::templates_dir(root),
    ] {
        io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let mut files = Vec::new();

    for (name, content) in WORKFLOW_COMMANDS {
        let path = paths::commands_dir(root).join(name);
        files.push(write_managed(root, path, content)?);
    }
    for (name, content) in DOCUMENT_TEMPLATES {
        let path = paths::templates_dir(root).join(name);
        files.push(write_managed(root, path, content)?);
    }

    let config = SpecConfig::default().to_json()?;
    files.push(write_managed(root, paths::config_path(root), &config)?);

    files.push(write_claude_md(root)?);
    Ok(files)
}

/// Create CLAUDE.md, or replace/append its `# Spec Workflow` section while
/// leaving every other line of the file alone.
pub fn write_claude_md(root: &Path) -> anyhow::Result<WrittenFile> {
    let path = paths::claude_md_path(root);
    let existing = io::read_optional(&path).context("failed to read CLAUDE.md")?;
    let merged = section::merge(existing.as_deref(), CLAUDE_MD_SECTION, SPEC_WORKFLOW_MARKER);
    write_managed(root, path, &merged)
}

fn write_managed(root: &Path, path: PathBuf, content: &str) -> anyhow::Result<WrittenFile> {
    let outcome = io::upsert(&path, content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    let rel_path = path.strip_prefix(root).unwrap_or(&path).display().to_string();
    tracing::debug!(path = %rel_path, ?outcome, "managed file");
    Ok(WrittenFile {
        path: rel_path,
        outcome,
    })
}

/// Plain text, or a `{"cancelled": true}` object so `--json` stdout stays parseable.
fn cancelled_message(json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&serde_json::json!({ "cancelled": true }))?);
    }
    Ok("Setup cancelled.".to_string())
}

fn confirm(question: &str, default: bool) -> anyhow::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    eprint!("{question} {hint} ");
    std::io::stderr().flush()?;
    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;
    Ok(parse_answer(&input, default))
}

fn parse_answer(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

fn print_plan() {
    println!("\nThis will create:");
    println!("  .claude/ directory structure");
    println!("  7 slash commands for the spec workflow");
    println!("  document templates");
    println!("  .claude/spec-config.json");
    println!("  CLAUDE.md workflow section (existing content is kept)");
    println!();
}

fn print_next_steps() {
    println!("\nAvailable commands:");
    println!("  /spec-create <feature-name>  - Create a new spec");
    println!("  /spec-requirements           - Generate requirements");
    println!("  /spec-design                 - Generate design");
    println!("  /spec-tasks                  - Generate tasks");
    println!("  /spec-execute <task-id>      - Execute tasks");
    println!("  /{{spec-name}}-task-{{id}}       - Generated per-task commands");
    println!("  /spec-status                 - Show status");
    println!("  /spec-list                   - List all specs");
    println!("\nNext steps:");
    println!("  1. Run: claude");
    println!("  2. Try: /spec-create my-feature");
    println!("  3. After tasks are approved: specflow generate my-feature");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Managed content
// ---------------------------------------------------------------------------

const CLAUDE_MD_SECTION: &str = r#"# Spec Workflow

This project uses a spec-driven workflow for feature development. Every feature moves through four phases in order: Requirements → Design → Tasks → Implementation.

## Workflow Philosophy

You guide the user through systematic, spec-driven feature development that keeps quality, maintainability and completeness in view.

### Core Principles
- **Structured Development**: Follow the phases in sequence without skipping steps
- **User Approval Required**: Each phase must be explicitly approved before proceeding
- **Atomic Implementation**: Execute one task at a time during implementation
- **Requirement Traceability**: All tasks must reference specific requirements
- **Test-Driven Focus**: Prioritize testing and validation throughout

## Available Commands

| Command | Purpose | Usage |
|---------|---------|-------|
| `/spec-create <feature-name>` | Create a new feature spec | `/spec-create user-auth "Login system"` |
| `/spec-requirements` | Generate requirements document | `/spec-requirements` |
| `/spec-design` | Generate design document | `/spec-design` |
| `/spec-tasks` | Generate implementation tasks | `/spec-tasks` |
| `/spec-execute <task-id>` | Execute specific task | `/spec-execute 1` |
| `/{spec-name}-task-{id}` | Execute specific task (generated) | `/user-auth-task-1` |
| `/spec-status` | Show current spec status | `/spec-status user-auth` |
| `/spec-list` | List all specs | `/spec-list` |

## Detailed Workflow Process

### Phase 1: Requirements Gathering (`/spec-requirements`)
**Your Role**: Generate comprehensive requirements based on user input

**Process**:
1. Parse the feature description provided by the user
2. Create user stories in format: "As a [role], I want [feature], so that [benefit]"
3. Generate acceptance criteria using EARS format:
   - WHEN [event] THEN [system] SHALL [response]
   - IF [condition] THEN [system] SHALL [response]
4. Consider edge cases, error scenarios, and non-functional requirements
5. Present complete requirements document
6. Ask: "Do the requirements look good? If so, we can move on to the design."
7. **CRITICAL**: Wait for explicit approval before proceeding
8. **AFTER APPROVAL**: Run `specflow generate {feature-name}`

**Requirements Format**:
```markdown
## Requirements

### Requirement 1
**User Story:** As a [role], I want [feature], so that [benefit]

#### Acceptance Criteria
1. WHEN [event] THEN [system] SHALL [response]
2. IF [condition] THEN [system] SHALL [response]
```

### Phase 2: Design Creation (`/spec-design`)
**Your Role**: Create technical architecture and design

**Process**:
1. Research existing codebase patterns and architecture
2. Create a design document covering system overview, component interfaces, data models, error handling and testing approach
3. Include Mermaid diagrams for visual representation
4. Present complete design document
5. Ask: "Does the design look good? If so, we can move on to the implementation plan."
6. **CRITICAL**: Wait for explicit approval before proceeding

**Design Sections Required**:
- Overview
- Architecture (with Mermaid diagrams)
- Components and Interfaces
- Data Models
- Error Handling
- Testing Strategy

### Phase 3: Task Planning (`/spec-tasks`)
**Your Role**: Break design into executable implementation tasks

**Process**:
1. Convert design into atomic, executable coding tasks
2. Ensure each task:
   - Has a clear, actionable objective
   - References specific requirements using _Requirements: X.Y_ format
   - Builds incrementally on previous tasks
   - Focuses on coding activities only
3. Use checkbox format with hierarchical numbering
4. Present complete task list
5. Ask: "Do the tasks look good?"
6. **CRITICAL**: Wait for explicit approval before proceeding
7. **AFTER APPROVAL**: Run `specflow generate {feature-name}`

**Task Format**:
```markdown
- [ ] 1. Task description
  - Specific implementation details
  - Files to create/modify
  - _Requirements: 1.1, 2.3_
```

**Excluded Task Types**:
- User acceptance testing
- Production deployment
- Performance metrics gathering
- User training or documentation
- Business process changes

### Phase 4: Implementation (`/spec-execute` or generated commands)
**Your Role**: Execute tasks systematically with validation

**Two Ways to Execute Tasks**:
1. **Direct**: `/spec-execute 1 feature-name`
2. **Generated**: `/feature-name-task-1`

**Process**:
1. Load requirements.md, design.md, and tasks.md for context
2. Execute ONLY the specified task (never multiple tasks)
3. Implement following existing code patterns and conventions
4. Validate implementation against referenced requirements
5. Run tests and checks if applicable
6. **CRITICAL**: Mark task as complete by changing [ ] to [x] in tasks.md
7. Confirm task completion status to user
8. **CRITICAL**: Stop and wait for user review before proceeding

## Critical Workflow Rules

### Approval Workflow
- **NEVER** proceed to the next phase without explicit user approval
- Accept only clear affirmative responses: "yes", "approved", "looks good", etc.
- If user provides feedback, make revisions and ask for approval again
- Continue revision cycle until explicit approval is received

### Task Execution
- **ONLY** execute one task at a time during implementation
- **CRITICAL**: Mark completed tasks as [x] in tasks.md before stopping
- **ALWAYS** stop after completing a task
- **NEVER** automatically proceed to the next task
- **MUST** wait for user to request next task execution

### Task Completion Protocol
When completing any task during `/spec-execute`:
1. **Update tasks.md**: Change task status from `- [ ]` to `- [x]`
2. **Confirm to user**: State clearly "Task X has been marked as complete"
3. **Stop execution**: Do not proceed to next task automatically
4. **Wait for instruction**: Let user decide next steps

### Phase Sequence
- **MUST** follow Requirements → Design → Tasks → Implementation order
- **CANNOT** skip phases or combine phases
- **MUST** complete each phase before proceeding

## File Structure

```
.claude/
├── specs/
│   └── {feature-name}/
│       ├── requirements.md    # User stories and acceptance criteria
│       ├── design.md          # Technical architecture and design
│       └── tasks.md           # Implementation task breakdown
├── commands/
│   ├── spec-*.md              # Main workflow commands
│   └── {feature-name}/        # Generated task commands
│       ├── task-1.md
│       ├── task-2.md
│       └── task-2.1.md
├── templates/
│   └── *-template.md          # Document templates
└── spec-config.json           # Workflow configuration
```

## Generated Task Commands

`specflow generate {spec-name}` reads `.claude/specs/{spec-name}/tasks.md` and writes one command per pending task to `.claude/commands/{spec-name}/task-{id}.md`. Type `/user-auth-task-1` instead of `/spec-execute 1 user-auth`.

**When to Run It**:
- **After requirements approval** in `/spec-create`
- **After tasks approval** in `/spec-tasks`
- **Command**: `specflow generate {spec-name}`

Completed tasks (`- [x]`) get no command. Re-running the command refreshes every pending task's file.

## Error Handling

If issues arise during the workflow:
- **Requirements unclear**: Ask targeted questions to clarify
- **Design too complex**: Suggest breaking into smaller components
- **Tasks too broad**: Break into smaller, more atomic tasks
- **Implementation blocked**: Document the blocker and suggest alternatives

## Getting Started

1. **Initialize**: `/spec-create <feature-name> "Description of feature"`
2. **Requirements**: Follow the requirements generation process
3. **Design**: Review and approve the technical design
4. **Tasks**: Review and approve the implementation plan
5. **Implementation**: Execute tasks one by one with `/spec-execute <task-id>`
6. **Validation**: Ensure each task meets requirements before proceeding
"#;

const SPEC_CREATE_COMMAND: &str = r#"# Spec Create Command

Create a new feature specification following the spec-driven workflow.

## Usage
```
/spec-create <feature-name> [description]
```

## Instructions
You are helping create a new feature specification. Follow these steps:

**IMPORTANT**: After requirements approval, you MUST generate the task commands:
`specflow generate {feature-name}`

1. **Create Directory Structure**
   - Create `.claude/specs/{feature-name}/` directory
   - Initialize empty requirements.md, design.md, and tasks.md files

2. **Parse Feature Description**
   - Take the feature name and optional description
   - Begin the requirements gathering phase immediately
   - Do not ask sequential questions - generate initial requirements

3. **Generate Initial Requirements**
   - Use the requirements template from `.claude/templates/requirements-template.md`
   - Create user stories in "As a [role], I want [feature], so that [benefit]" format
   - Write acceptance criteria in EARS format (WHEN/IF/THEN statements)
   - Consider edge cases and technical constraints

4. **Request User Approval**
   - Present the requirements document
   - Ask: "Do the requirements look good? If so, we can move on to the design."
   - Wait for explicit approval before proceeding

5. **Generate Initial Task Commands** (REQUIRED after approval)
   - **MUST RUN**: `specflow generate {feature-name}`
   - **PURPOSE**: Creates individual task commands in `.claude/commands/{feature-name}/`
   - **RESULT**: User can then use `/{feature-name}-task-1`, `/{feature-name}-task-2`, etc.
   - **NOTE**: Commands are refreshed again once tasks.md is approved in /spec-tasks

6. **Rules**
   - Only create ONE spec at a time
   - Always use kebab-case for feature names
   - Follow the exact EARS format for acceptance criteria
   - Do not proceed without explicit user approval

## Example
```
/spec-create user-authentication "Allow users to sign up and log in securely"
```

## Next Steps
After user approval, proceed to `/spec-design` phase.
"#;

const SPEC_REQUIREMENTS_COMMAND: &str = r#"# Spec Requirements Command

Generate or update requirements document for an existing spec.

## Usage
```
/spec-requirements [feature-name]
```

## Instructions
You are working on the requirements phase of the spec workflow.

1. **Identify Current Spec**
   - If no feature-name provided, look for specs in `.claude/specs/` directory
   - If multiple specs exist, ask user to specify which one
   - Load existing requirements.md if it exists

2. **Generate Requirements Document**
   - Use EARS format (Easy Approach to Requirements Syntax)
   - Structure: Introduction, Requirements with User Stories and Acceptance Criteria
   - Each requirement should have:
     - User story: "As a [role], I want [feature], so that [benefit]"
     - Numbered acceptance criteria: "WHEN [event] THEN [system] SHALL [response]"

3. **Content Guidelines**
   - Consider edge cases and error handling
   - Include non-functional requirements (performance, security, etc.)
   - Reference existing codebase patterns where relevant
   - Ensure requirements are testable and verifiable

4. **Approval Process**
   - Present the complete requirements document
   - Ask: "Do the requirements look good? If so, we can move on to the design."
   - Make revisions based on feedback
   - Continue until explicit approval is received

## Requirements Format
```markdown
# Requirements Document

## Introduction
[Brief summary of the feature]

## Requirements

### Requirement 1
**User Story:** As a [role], I want [feature], so that [benefit]

#### Acceptance Criteria
1. WHEN [event] THEN [system] SHALL [response]
2. IF [condition] THEN [system] SHALL [response]
```

## Next Phase
After approval, proceed to `/spec-design`.
"#;

const SPEC_DESIGN_COMMAND: &str = r#"# Spec Design Command

Generate design document based on approved requirements.

## Usage
```
/spec-design [feature-name]
```

## Instructions
You are working on the design phase of the spec workflow.

1. **Prerequisites**
   - Ensure requirements.md exists and is approved
   - Load the requirements document for context
   - Research existing codebase patterns and architecture

2. **Generate Design Document**
   - Create a design following `.claude/templates/design-template.md`
   - Include all required sections:
     - Overview
     - Architecture
     - Components and Interfaces
     - Data Models
     - Error Handling
     - Testing Strategy

3. **Research Phase**
   - Analyze existing codebase for patterns
   - Identify integration points
   - Research technical dependencies
   - Consider scalability and maintainability

4. **Design Content**
   - Use Mermaid diagrams for visual representations
   - Define clear interfaces and contracts
   - Specify data models and validation rules
   - Plan error handling and edge cases
   - Outline testing approach

5. **Approval Process**
   - Present the complete design document
   - Ask: "Does the design look good? If so, we can move on to the implementation plan."
   - Incorporate feedback and revisions
   - Continue until explicit approval

## Next Phase
After approval, proceed to `/spec-tasks`.
"#;

const SPEC_TASKS_COMMAND: &str = r#"# Spec Tasks Command

Generate implementation task list based on approved design.

## Usage
```
/spec-tasks [feature-name]
```

## Instructions
You are working on the tasks phase of the spec workflow.

**IMPORTANT**: After tasks approval, you MUST generate the task commands:
`specflow generate {feature-name}`

1. **Prerequisites**
   - Ensure design.md exists and is approved
   - Load both requirements.md and design.md for context
   - Understand the complete feature scope

2. **Generate Task List**
   - Break design into atomic, executable coding tasks
   - Use checkbox format with numbered hierarchy
   - Each task should reference specific requirements
   - Focus ONLY on coding tasks (no deployment, user testing, etc.)

3. **Task Guidelines**
   - Tasks should be concrete and actionable
   - Include specific file names and components
   - Build incrementally (each task builds on previous)
   - Reference requirements using _Requirements: X.Y_ format
   - Use test-driven development approach

4. **Task Format**
   ```markdown
   - [ ] 1. Task description
     - Sub-bullet with details
     - Specific files to create/modify
     - _Requirements: 1.1, 2.3_
   ```
   Only lines shaped like `- [ ] <number>[.<number>...] <description>` become task commands.

5. **Excluded Tasks**
   - User acceptance testing
   - Deployment to production
   - Performance metrics gathering
   - User training or documentation
   - Business process changes

6. **Approval Process**
   - Present the complete task list
   - Ask: "Do the tasks look good?"
   - Make revisions based on feedback
   - Continue until explicit approval

7. **Generate Task Commands** (REQUIRED after approval)
   - **MUST RUN**: `specflow generate {feature-name}`
   - **PURPOSE**: Creates/updates individual task commands in `.claude/commands/{feature-name}/`
   - **RESULT**: Each task gets its own command: `/{feature-name}-task-{task-id}`
   - **EXAMPLE**: Creates `/{feature-name}-task-1`, `/{feature-name}-task-2.1`, etc.

## Next Phase
After approval and command generation, you can:
- Use `/spec-execute` to implement tasks
- Use individual task commands: `/{feature-name}-task-1`, `/{feature-name}-task-2`, etc.
- Check progress with `/spec-status {feature-name}`
"#;

const SPEC_EXECUTE_COMMAND: &str = r#"# Spec Execute Command

Execute specific tasks from the approved task list.

## Usage
```
/spec-execute [task-id] [feature-name]
```

## Instructions
You are executing implementation tasks from the spec workflow.

1. **Prerequisites**
   - Ensure tasks.md exists and is approved
   - Load requirements.md, design.md, and tasks.md for context
   - Identify the specific task to execute

2. **Task Execution**
   - Focus on ONE task at a time
   - If task has sub-tasks, start with those
   - Follow the implementation details from design.md
   - Verify against requirements specified in the task

3. **Implementation Guidelines**
   - Write clean, maintainable code
   - Follow existing code patterns and conventions
   - Include appropriate error handling
   - Add unit tests where specified
   - Document complex logic

4. **Validation**
   - Verify implementation meets acceptance criteria
   - Run tests if they exist
   - Check for lint/type errors
   - Ensure integration with existing code

5. **Completion**
   - **CRITICAL**: Mark task as complete in tasks.md by changing [ ] to [x]
   - Stop and wait for user review
   - DO NOT automatically proceed to next task
   - Confirm task completion status to user

## Task Selection
If no task-id specified:
- Look at tasks.md for the spec
- Recommend the next pending task
- Ask user to confirm before proceeding

## Examples
```
/spec-execute 1 user-authentication
/spec-execute 2.1 user-authentication
```

## Important Rules
- Only execute ONE task at a time
- **ALWAYS** mark completed tasks as [x] in tasks.md
- Always stop after completing a task
- Wait for user approval before continuing
- Never skip tasks or jump ahead
"#;

const SPEC_STATUS_COMMAND: &str = r#"# Spec Status Command

Show current status of all specs or a specific spec.

## Usage
```
/spec-status [feature-name]
```

## Instructions
Display the current status of spec workflows.

1. **If no feature-name provided:**
   - List all specs in `.claude/specs/` directory
   - Show current phase for each spec
   - Display completion status

2. **If feature-name provided:**
   - Show detailed status for that spec
   - Display current workflow phase
   - Show completed vs pending tasks (`specflow tasks {feature-name}` lists the pending ones)
   - List next recommended actions

3. **Status Information:**
   - Requirements: [Complete/In Progress/Pending]
   - Design: [Complete/In Progress/Pending]
   - Tasks: [Complete/In Progress/Pending]
   - Implementation: [X/Y tasks complete]

4. **Output Format:**
   ```
   Spec: user-authentication
   Phase: Implementation
   Progress: Requirements ✅ | Design ✅ | Tasks ✅
   Implementation: 3/8 tasks complete
   Next: Execute task 4 - "Implement password validation"
   ```

## Workflow Phases
- **Requirements**: Gathering and documenting requirements
- **Design**: Creating technical design and architecture
- **Tasks**: Breaking down into implementation tasks
- **Implementation**: Executing individual tasks
- **Complete**: All tasks finished and integrated
"#;

const SPEC_LIST_COMMAND: &str = r#"# Spec List Command

List all specs in the current project.

## Usage
```
/spec-list
```

## Instructions
Display a comprehensive list of all specs in the project.

1. **Scan Directory**
   - Look in `.claude/specs/` directory
   - Find all spec directories
   - Check for required files (requirements.md, design.md, tasks.md)

2. **Display Information**
   - Feature name
   - Current phase
   - Completion status
   - Last modified date
   - Brief description from requirements

3. **Output Format**
   ```
   Project Specs Overview

   1. user-authentication (Complete)
      Phase: Implementation (7/8 tasks)
      Last updated: 2025-01-15

   2. data-export (In Progress)
      Phase: Design
      Last updated: 2025-01-14
   ```

4. **Additional Actions**
   - Show total spec count
   - Highlight specs needing attention
   - Suggest next actions for each spec
"#;

const REQUIREMENTS_TEMPLATE: &str = r#"# Requirements Document

## Introduction

[Provide a brief overview of the feature, its purpose, and its value to users]

## Requirements

### Requirement 1

**User Story:** As a [role], I want [feature], so that [benefit]

#### Acceptance Criteria

1. WHEN [event] THEN [system] SHALL [response]
2. IF [precondition] THEN [system] SHALL [response]
3. WHEN [event] AND [condition] THEN [system] SHALL [response]

### Requirement 2

**User Story:** As a [role], I want [feature], so that [benefit]

#### Acceptance Criteria

1. WHEN [event] THEN [system] SHALL [response]
2. IF [precondition] THEN [system] SHALL [response]

## Non-Functional Requirements

### Performance
- [Performance requirements]

### Security
- [Security requirements]

### Reliability
- [Reliability requirements]

### Usability
- [Usability requirements]
"#;

const DESIGN_TEMPLATE: &str = r#"# Design Document

## Overview

[High-level description of the feature and its place in the overall system]

## Architecture

[Describe the overall architecture and design patterns used]

```mermaid
graph TD
    A[Component A] --> B[Component B]
    B --> C[Component C]
```

## Components and Interfaces

### Component 1
- **Purpose:** [What this component does]
- **Interfaces:** [Public methods/APIs]
- **Dependencies:** [What it depends on]

### Component 2
- **Purpose:** [What this component does]
- **Interfaces:** [Public methods/APIs]
- **Dependencies:** [What it depends on]

## Data Models

### Model 1
[Fields, types and validation rules]

### Model 2
[Fields, types and validation rules]

## Error Handling

### Error Scenarios
1. **Scenario 1:** [Description]
   - **Handling:** [How to handle]
   - **User Impact:** [What user sees]

2. **Scenario 2:** [Description]
   - **Handling:** [How to handle]
   - **User Impact:** [What user sees]

## Testing Strategy

### Unit Testing
- [Unit testing approach]
- [Key components to test]

### Integration Testing
- [Integration testing approach]
- [Key flows to test]

### End-to-End Testing
- [E2E testing approach]
- [User scenarios to test]
"#;

const TASKS_TEMPLATE: &str = r#"# Implementation Plan

## Task Overview
[Brief description of the implementation approach]

## Tasks

- [ ] 1. Set up project structure and core interfaces
  - Create directory structure for components
  - Define core interfaces and types
  - Set up basic configuration
  - _Requirements: 1.1_

- [ ] 2. Implement data models and validation
- [ ] 2.1 Create base model classes
  - Define data types
  - Implement validation methods
  - Write unit tests for models
  - _Requirements: 2.1, 2.2_

- [ ] 2.2 Implement specific model classes
  - Create concrete model implementations
  - Add relationship handling
  - Test model interactions
  - _Requirements: 2.3_

- [ ] 3. Create service layer
- [ ] 3.1 Implement core service interfaces
  - Define service contracts
  - Create base service implementations
  - _Requirements: 3.1_

- [ ] 3.2 Implement business logic services
  - Create specific service implementations
  - Add error handling
  - Write service unit tests
  - _Requirements: 3.2, 3.3_

- [ ] 4. Integration and testing
- [ ] 4.1 Write end-to-end tests
  - Write user journey tests
  - _Requirements: All_

- [ ] 4.2 Final integration and cleanup
  - Integrate all components
  - Fix any integration issues
  - _Requirements: All_
"#;

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Ecosystems recognized by their marker files in the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectType {
    #[serde(rename = "Node.js")]
    NodeJs,
    Python,
    Java,
    #[serde(rename = "C#")]
    CSharp,
    Go,
    Rust,
    #[serde(rename = "PHP")]
    Php,
    Ruby,
}

impl ProjectType {
    pub fn all() -> &'static [ProjectType] {
        &[
            ProjectType::NodeJs,
            ProjectType::Python,
            ProjectType::Java,
            ProjectType::CSharp,
            ProjectType::Go,
            ProjectType::Rust,
            ProjectType::Php,
            ProjectType::Ruby,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::NodeJs => "Node.js",
            ProjectType::Python => "Python",
            ProjectType::Java => "Java",
            ProjectType::CSharp => "C#",
            ProjectType::Go => "Go",
            ProjectType::Rust => "Rust",
            ProjectType::Php => "PHP",
            ProjectType::Ruby => "Ruby",
        }
    }

    /// Marker files; a leading `*` matches any root entry with that suffix.
    pub fn indicators(self) -> &'static [&'static str] {
        match self {
            ProjectType::NodeJs => &["package.json", "node_modules"],
            ProjectType::Python => &["requirements.txt", "setup.py", "pyproject.toml", "__pycache__"],
            ProjectType::Java => &["pom.xml", "build.gradle"],
            ProjectType::CSharp => &["*.csproj", "*.sln"],
            ProjectType::Go => &["go.mod", "go.sum"],
            ProjectType::Rust => &["Cargo.toml", "Cargo.lock"],
            ProjectType::Php => &["composer.json", "vendor"],
            ProjectType::Ruby => &["Gemfile", "Gemfile.lock"],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect every ecosystem present in `root`, in declaration order.
pub fn detect_project_types(root: &Path) -> Vec<ProjectType> {
    let entries: Vec<String> = match std::fs::read_dir(root) {
        Ok(rd) => rd
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(e) => {
            tracing::debug!(root = %root.display(), error = %e, "cannot read project root");
            return Vec::new();
        }
    };

    ProjectType::all()
        .iter()
        .copied()
        .filter(|t| t.indicators().iter().any(|ind| matches_indicator(&entries, ind)))
        .collect()
}

fn matches_indicator(entries: &[String], indicator: &str) -> bool {
    match indicator.strip_prefix('*') {
        Some(suffix) => entries.iter().any(|e| e.ends_with(suffix)),
        None => entries.iter().any(|e| e == indicator),
    }
}

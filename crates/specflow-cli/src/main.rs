mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "specflow",
    about = "Spec-driven development workflow: scaffold .claude/ and generate per-task commands",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .claude/ or .git/)
    #[arg(long, global = true, visible_alias = "project", env = "SPECFLOW_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up the spec workflow in the current project
    Init {
        /// Overwrite an existing .claude/ directory without asking
        #[arg(long, short = 'f')]
        force: bool,

        /// Skip all confirmation prompts
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Regenerate per-task slash commands from a spec's tasks.md
    Generate {
        /// Spec name (directory under .claude/specs/)
        spec: String,
    },

    /// List pending tasks of a spec without writing anything
    Tasks {
        /// Spec name (directory under .claude/specs/)
        spec: String,
    },

    /// Inspect .claude/spec-config.json
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Run the full setup inside a temporary directory
    Test,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init { force, yes } => cmd::init::run(&root, force, yes, cli.json),
        Commands::Generate { spec } => cmd::generate::run(&root, &spec, cli.json),
        Commands::Tasks { spec } => cmd::tasks::run(&root, &spec, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Test => cmd::selftest::run(cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Capstan - a pre-build toolchain hook for Windows native builds
#[derive(Parser)]
#[command(name = "capstan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Patch the build environment and emit the changed assignments
    Apply(ApplyArgs),

    /// Show which toolchain the hook would select
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Project directory (defaults to $PROJECT_DIR, then the current directory)
    #[arg(long, env = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Output format for the emitted assignments
    #[arg(long, value_enum, default_value = "env")]
    pub format: OutputFormat,

    /// Job count for the parallelism default (overrides config)
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

/// How `apply` prints the assignments it changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One KEY=VALUE line per changed variable
    Env,
    /// A single JSON object with outcome, env, and vars
    Json,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project directory (defaults to $PROJECT_DIR, then the current directory)
    #[arg(long, env = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

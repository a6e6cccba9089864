//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Mooring - query a compiler frontend for target information
#[derive(Parser)]
#[command(name = "mooring")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the frontend to describe a target
    TargetInfo(TargetInfoArgs),

    /// Toolchain management
    Toolchain(ToolchainArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for target info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The JSON printed by the frontend, re-encoded
    Json,
    /// A short human-readable summary
    Human,
}

#[derive(Args)]
pub struct TargetInfoArgs {
    /// Target triple (defaults to the host, as reported by the frontend)
    #[arg(long)]
    pub target: Option<String>,

    /// Target variant triple (e.g. a Mac Catalyst triple)
    #[arg(long)]
    pub target_variant: Option<String>,

    /// SDK path
    #[arg(long)]
    pub sdk: Option<PathBuf>,

    /// Compiler resource directory
    #[arg(long)]
    pub resource_dir: Option<PathBuf>,

    /// Replace this process with the frontend instead of capturing its output
    #[arg(long)]
    pub in_place: bool,

    /// Print the job as JSON without running it
    #[arg(long)]
    pub print_job: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ToolchainArgs {
    #[command(subcommand)]
    pub command: ToolchainCommands,
}

#[derive(Subcommand)]
pub enum ToolchainCommands {
    /// Show current toolchain configuration
    Show,

    /// Override the toolchain for this project
    Override(ToolchainOverrideArgs),
}

#[derive(Args)]
pub struct ToolchainOverrideArgs {
    /// Frontend executable path
    #[arg(long)]
    pub frontend: Option<PathBuf>,

    /// SDK path
    #[arg(long)]
    pub sdk: Option<PathBuf>,

    /// Compiler resource directory
    #[arg(long)]
    pub resource_dir: Option<PathBuf>,

    /// Target triple
    #[arg(long)]
    pub target: Option<String>,

    /// Target variant triple
    #[arg(long)]
    pub target_variant: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

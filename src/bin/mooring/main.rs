//! Mooring CLI - query a compiler frontend for target information

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("mooring=debug")
    } else {
        EnvFilter::new("mooring=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let color = !cli.no_color;

    // Execute command
    match cli.command {
        Commands::TargetInfo(args) => commands::target_info::execute(args, color),
        Commands::Toolchain(args) => commands::toolchain::execute(args, color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

//! `mooring toolchain` command

use anyhow::{Context, Result};

use crate::cli::{ToolchainArgs, ToolchainCommands, ToolchainOverrideArgs};
use mooring::toolchain::detect::load_toolchain_config_from_files;
use mooring::toolchain::{SystemToolchain, Tool, ToolResolver};
use mooring::util::config::{
    global_toolchain_config_path, project_toolchain_config_path, ToolchainConfig,
};
use mooring::util::diagnostic::{self, suggestions, Diagnostic};
use mooring::Triple;

pub fn execute(args: ToolchainArgs, color: bool) -> Result<()> {
    match args.command {
        ToolchainCommands::Show => show_toolchain(color),
        ToolchainCommands::Override(override_args) => override_toolchain(override_args),
    }
}

fn show_toolchain(color: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let config = load_toolchain_config_from_files(&cwd);
    let toolchain = SystemToolchain::from_config(&config);

    println!("Toolchain:");
    println!();

    match toolchain.resolve_tool(Tool::Frontend) {
        Ok(path) => println!("  Frontend: {}", path.display()),
        Err(e) => {
            println!("  Frontend: not found");
            let diag = Diagnostic::warning(e.to_string())
                .with_suggestion(suggestions::SET_FRONTEND_ENV)
                .with_suggestion(suggestions::INSTALL_TOOLCHAIN);
            diagnostic::emit(&diag, color);
        }
    }

    let tc = &config.toolchain;
    if let Some(ref sdk) = tc.sdk {
        println!("  SDK:            {}", sdk.display());
    }
    if let Some(ref dir) = tc.resource_dir {
        println!("  Resource dir:   {}", dir.display());
    }
    if let Some(ref target) = tc.target {
        println!("  Target:         {}", target);
    }
    if let Some(ref variant) = tc.target_variant {
        println!("  Target variant: {}", variant);
    }

    println!();
    println!("Config:");
    if let Some(global) = global_toolchain_config_path() {
        println!("  Global:  {}", describe_config(&global));
    }
    println!(
        "  Project: {}",
        describe_config(&project_toolchain_config_path(&cwd))
    );

    if let Some(value) = std::env::var_os(Tool::Frontend.env_var()) {
        println!();
        println!("Environment:");
        println!("  {}={}", Tool::Frontend.env_var(), value.to_string_lossy());
    }

    Ok(())
}

fn describe_config(path: &std::path::Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not present)", path.display())
    }
}

fn override_toolchain(args: ToolchainOverrideArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let path = project_toolchain_config_path(&cwd);

    let mut config = ToolchainConfig::load_if_exists(&path)?;
    let mut update = ToolchainConfig::default();
    update.toolchain.frontend = args.frontend;
    update.toolchain.sdk = args.sdk;
    update.toolchain.resource_dir = args.resource_dir;
    update.toolchain.target = args.target.map(Triple::new);
    update.toolchain.target_variant = args.target_variant.map(Triple::new);

    if !update.has_overrides() {
        anyhow::bail!("nothing to override; pass at least one of --frontend, --sdk, --resource-dir, --target, --target-variant");
    }

    config.merge(update);
    config.save(&path)?;

    eprintln!("     Updated {}", path.display());
    Ok(())
}

//! `mooring target-info` command

use anyhow::{Context, Result};

use crate::cli::{OutputFormat, TargetInfoArgs};
use mooring::job::{encode_target_info, FrontendTargetInfo, Target};
use mooring::ops::{target_info, TargetInfoOptions};
use mooring::toolchain::detect::load_toolchain_config_from_files;
use mooring::toolchain::{SystemToolchain, Toolchain};
use mooring::util::diagnostic;
use mooring::{ProcessExecutor, Triple};

pub fn execute(args: TargetInfoArgs, color: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let config = load_toolchain_config_from_files(&cwd);
    let toolchain = SystemToolchain::from_config(&config);

    let options = TargetInfoOptions {
        target: args.target.map(Triple::new),
        target_variant: args.target_variant.map(Triple::new),
        sdk: args.sdk,
        resource_dir: args.resource_dir,
        in_place: args.in_place,
    };
    let query = options.to_query(&config);

    if args.print_job {
        let job = match toolchain.target_info_job(&query) {
            Ok(job) => job,
            Err(e) => {
                let diag = mooring::ops::TargetInfoError::from(e).to_diagnostic();
                diagnostic::emit(&diag, color);
                std::process::exit(1);
            }
        };
        tracing::info!("Would run: {}", job.display_command());
        let json = serde_json::to_string_pretty(&job).context("failed to serialize job")?;
        println!("{}", json);
        return Ok(());
    }

    let executor = ProcessExecutor::new().working_dir(&cwd);
    let info = match target_info(&toolchain, &executor, &query) {
        Ok(info) => info,
        Err(e) => {
            diagnostic::emit(&e.to_diagnostic(), color);
            std::process::exit(1);
        }
    };

    match args.format {
        OutputFormat::Json => {
            let json = encode_target_info(&info).context("failed to serialize target info")?;
            println!("{}", json);
        }
        OutputFormat::Human => print!("{}", format_human(&info)),
    }

    Ok(())
}

fn format_target(label: &str, target: &Target) -> String {
    format!(
        "{label}: {}\n  Unversioned: {}\n  Module:      {}\n  Arch:        {}\n  Requires rpath: {}\n",
        target.triple,
        target.unversioned_triple,
        target.module_triple,
        target.triple.arch(),
        if target.libraries_require_rpath { "yes" } else { "no" },
    )
}

fn format_human(info: &FrontendTargetInfo) -> String {
    let mut out = format_target("Target", &info.target);

    if let Some(ref variant) = info.target_variant {
        out.push('\n');
        out.push_str(&format_target("Target variant", variant));
    }

    if let Some(ref paths) = info.paths {
        out.push_str("\nRuntime resources: ");
        out.push_str(&paths.runtime_resource_path);
        out.push('\n');
        for path in &paths.runtime_library_paths {
            out.push_str(&format!("  Library path: {}\n", path));
        }
        for path in &paths.runtime_library_import_paths {
            out.push_str(&format!("  Import path:  {}\n", path));
        }
    }

    out
}

//! Toolchain abstraction.
//!
//! A toolchain knows where its executables live and how to describe jobs
//! that run them. Locating executables is behind [`ToolResolver`]; the job
//! factories in [`Toolchain`] are written once on top of it.
//!
//! Tool lookup priority for [`SystemToolchain`]:
//! 1. Toolchain config file (`.mooring/toolchain.toml` or `~/.mooring/toolchain.toml`)
//! 2. Environment variable (`MOORING_FRONTEND`)
//! 3. Searching PATH for the tool's executable names

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::{FileType, Triple, VirtualPath};
use crate::job::{ArgTemplate, Job, JobKind, TypedVirtualPath};

pub mod detect;

pub use detect::{load_toolchain_config_from_files, SystemToolchain};

/// A logical tool a toolchain can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// The compiler frontend executable
    Frontend,
}

impl Tool {
    /// Get the tool name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Frontend => "frontend",
        }
    }

    /// Executable names searched for on PATH, most specific first.
    pub fn executable_names(&self) -> &'static [&'static str] {
        match self {
            Tool::Frontend => &["swift-frontend", "swiftc"],
        }
    }

    /// Environment variable that overrides the tool path.
    pub fn env_var(&self) -> &'static str {
        match self {
            Tool::Frontend => "MOORING_FRONTEND",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool could not be located.
#[derive(Debug, Error)]
pub enum ToolResolutionError {
    #[error("no {tool} executable found (searched: {})", searched.join(", "))]
    NotFound { tool: Tool, searched: Vec<String> },

    #[error("configured {tool} executable does not exist: {}", path.display())]
    ConfiguredPathMissing { tool: Tool, path: PathBuf },

    #[error("{tool} executable path is not absolute: {}", path.display())]
    NotAbsolute { tool: Tool, path: PathBuf },
}

/// Locates the executables of a toolchain.
pub trait ToolResolver: Send + Sync {
    /// Return the absolute path of `tool`.
    fn resolve_tool(&self, tool: Tool) -> Result<PathBuf, ToolResolutionError>;
}

/// Parameters of a target-info query.
///
/// Every option is independent; `None` means the frontend decides (for
/// `target`, that is the host).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetInfoQuery {
    pub target: Option<Triple>,
    pub target_variant: Option<Triple>,
    pub sdk_path: Option<VirtualPath>,
    pub resource_dir_path: Option<VirtualPath>,
    pub requires_in_place_execution: bool,
}

/// Job factories available on every [`ToolResolver`].
pub trait Toolchain: ToolResolver {
    /// Describe a job asking the frontend to print target info as JSON.
    ///
    /// The command line is
    /// `-frontend -print-target-info [-target T] [-target-variant T] [-sdk P] [-resource-dir P]`
    /// with absent options left out entirely. Resolving the frontend is the
    /// only work done besides building the value.
    fn print_target_info_job(
        &self,
        target: Option<&Triple>,
        target_variant: Option<&Triple>,
        sdk_path: Option<&VirtualPath>,
        resource_dir_path: Option<&VirtualPath>,
        requires_in_place_execution: bool,
    ) -> Result<Job, ToolResolutionError> {
        let mut command_line = vec![
            ArgTemplate::flag("-frontend"),
            ArgTemplate::flag("-print-target-info"),
        ];

        // Without a target the frontend reports the host.
        if let Some(target) = target {
            command_line.push(ArgTemplate::flag("-target"));
            command_line.push(ArgTemplate::flag(target.as_str()));
        }

        if let Some(target_variant) = target_variant {
            command_line.push(ArgTemplate::flag("-target-variant"));
            command_line.push(ArgTemplate::flag(target_variant.as_str()));
        }

        if let Some(sdk_path) = sdk_path {
            command_line.push(ArgTemplate::flag("-sdk"));
            command_line.push(ArgTemplate::path(sdk_path.clone()));
        }

        if let Some(resource_dir_path) = resource_dir_path {
            command_line.push(ArgTemplate::flag("-resource-dir"));
            command_line.push(ArgTemplate::path(resource_dir_path.clone()));
        }

        let tool = self.resolve_tool(Tool::Frontend)?;
        if !tool.is_absolute() {
            return Err(ToolResolutionError::NotAbsolute {
                tool: Tool::Frontend,
                path: tool,
            });
        }

        Ok(Job::builder(JobKind::PrintTargetInfo, VirtualPath::Absolute(tool))
            .args(command_line)
            .output(TypedVirtualPath::new(
                VirtualPath::StandardOutput,
                FileType::JsonTargetInfo,
            ))
            .requires_in_place_execution(requires_in_place_execution)
            .supports_response_files(false)
            .build())
    }

    /// [`Toolchain::print_target_info_job`] taking its options as a struct.
    fn target_info_job(&self, query: &TargetInfoQuery) -> Result<Job, ToolResolutionError> {
        self.print_target_info_job(
            query.target.as_ref(),
            query.target_variant.as_ref(),
            query.sdk_path.as_ref(),
            query.resource_dir_path.as_ref(),
            query.requires_in_place_execution,
        )
    }
}

impl<T: ToolResolver + ?Sized> Toolchain for T {}

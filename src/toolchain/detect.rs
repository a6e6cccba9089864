//! Toolchain detection.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::util::config::{
    global_toolchain_config_path, load_toolchain_config, project_toolchain_config_path,
    ToolchainConfig,
};

use super::{Tool, ToolResolutionError, ToolResolver};

/// Load toolchain configuration from config files.
///
/// Searches for config in this order:
/// 1. Project config (`.mooring/toolchain.toml` in `project_root`)
/// 2. Global config (`~/.mooring/toolchain.toml`)
pub fn load_toolchain_config_from_files(project_root: &Path) -> ToolchainConfig {
    let project_path = project_toolchain_config_path(project_root);
    let global_path = global_toolchain_config_path().unwrap_or_default();

    load_toolchain_config(&global_path, &project_path)
}

/// The toolchain installed on this machine.
///
/// Tools are looked up lazily, every time they are asked for, so a
/// toolchain value can be created before the tools exist.
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    /// Frontend path from the toolchain config file
    frontend: Option<PathBuf>,
    /// Value of the tool's environment variable, captured at construction
    frontend_env: Option<OsString>,
    /// Directories searched for executables, in `PATH` syntax
    search_path: Option<OsString>,
}

impl Default for SystemToolchain {
    fn default() -> Self {
        SystemToolchain::new(None)
    }
}

impl SystemToolchain {
    /// Create a toolchain with an optional configured frontend path.
    ///
    /// The `MOORING_FRONTEND` and `PATH` environment variables are read here.
    pub fn new(frontend: Option<PathBuf>) -> Self {
        SystemToolchain {
            frontend,
            frontend_env: std::env::var_os(Tool::Frontend.env_var()).filter(|v| !v.is_empty()),
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Create a toolchain from loaded configuration.
    pub fn from_config(config: &ToolchainConfig) -> Self {
        SystemToolchain::new(config.toolchain.frontend.clone())
    }

    /// Detect the toolchain for the project rooted at `project_root`.
    pub fn detect(project_root: &Path) -> Self {
        let config = load_toolchain_config_from_files(project_root);
        SystemToolchain::from_config(&config)
    }

    /// Ignore the environment variable override.
    pub fn without_env(mut self) -> Self {
        self.frontend_env = None;
        self
    }

    /// Search these directories instead of `PATH`.
    pub fn search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    fn configured_path(&self, tool: Tool) -> Option<&Path> {
        match tool {
            Tool::Frontend => self.frontend.as_deref(),
        }
    }

    fn env_override(&self, tool: Tool) -> Option<&OsStr> {
        match tool {
            Tool::Frontend => self.frontend_env.as_deref(),
        }
    }

    fn which(&self, name: &OsStr) -> which::Result<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_default();
        which::which_in(name, self.search_path.as_ref(), cwd)
    }
}

impl ToolResolver for SystemToolchain {
    fn resolve_tool(&self, tool: Tool) -> Result<PathBuf, ToolResolutionError> {
        // Config file first
        if let Some(configured) = self.configured_path(tool) {
            if !configured.is_file() {
                return Err(ToolResolutionError::ConfiguredPathMissing {
                    tool,
                    path: configured.to_path_buf(),
                });
            }
            let path = absolutize(configured);
            tracing::debug!("Using configured {}: {}", tool, path.display());
            return Ok(path);
        }

        let mut searched = Vec::new();

        // Then the environment variable, which may be a path or a bare name
        if let Some(value) = self.env_override(tool) {
            match self.which(value) {
                Ok(path) => {
                    tracing::debug!("Using {} from {}: {}", tool, tool.env_var(), path.display());
                    return Ok(absolutize(&path));
                }
                Err(_) => {
                    let value = value.to_string_lossy();
                    tracing::warn!("{}={} does not name an executable", tool.env_var(), value);
                    searched.push(format!("{}={}", tool.env_var(), value));
                }
            }
        }

        // Finally PATH
        for name in tool.executable_names() {
            if let Ok(path) = self.which(OsStr::new(name)) {
                tracing::debug!("Found {} on PATH: {}", tool, path.display());
                return Ok(absolutize(&path));
            }
            searched.push(format!("`{}` on PATH", name));
        }

        Err(ToolResolutionError::NotFound { tool, searched })
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}

//! Configuration file support for Mooring.
//!
//! Toolchain settings are read from two locations:
//! - Global: `~/.mooring/toolchain.toml` - User-wide defaults
//! - Project: `.mooring/toolchain.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.
//!
//! ```toml
//! [toolchain]
//! frontend = "/usr/bin/swift-frontend"
//! sdk = "/Applications/Xcode.app/.../MacOSX.sdk"
//! resource-dir = "/usr/lib/swift"
//! target = "x86_64-apple-macosx10.15"
//! target-variant = "x86_64-apple-ios13.1-macabi"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Triple;

/// Toolchain configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Toolchain settings
    pub toolchain: ToolchainSettings,
}

/// Toolchain settings used when querying the frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ToolchainSettings {
    /// Path to the frontend executable (e.g., /usr/bin/swift-frontend)
    pub frontend: Option<PathBuf>,

    /// SDK passed as `-sdk`
    pub sdk: Option<PathBuf>,

    /// Resource directory passed as `-resource-dir`
    pub resource_dir: Option<PathBuf>,

    /// Default target triple
    pub target: Option<Triple>,

    /// Default target variant triple
    pub target_variant: Option<Triple>,
}

impl ToolchainConfig {
    /// Load toolchain configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read toolchain config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse toolchain config: {}", path.display()))
    }

    /// Load toolchain configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load toolchain config from {}: {:#}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Load toolchain configuration, or defaults if the file doesn't exist.
    ///
    /// Unlike [`ToolchainConfig::load_or_default`], a file that exists but
    /// cannot be read or parsed is an error. Use this before rewriting the
    /// file so that unreadable settings are never replaced.
    pub fn load_if_exists(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save toolchain configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).context("failed to serialize toolchain config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write toolchain config: {}", path.display()))?;

        Ok(())
    }

    /// Check if any toolchain settings are configured.
    pub fn has_overrides(&self) -> bool {
        let tc = &self.toolchain;
        tc.frontend.is_some()
            || tc.sdk.is_some()
            || tc.resource_dir.is_some()
            || tc.target.is_some()
            || tc.target_variant.is_some()
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: ToolchainConfig) {
        let other = other.toolchain;
        let tc = &mut self.toolchain;
        if other.frontend.is_some() {
            tc.frontend = other.frontend;
        }
        if other.sdk.is_some() {
            tc.sdk = other.sdk;
        }
        if other.resource_dir.is_some() {
            tc.resource_dir = other.resource_dir;
        }
        if other.target.is_some() {
            tc.target = other.target;
        }
        if other.target_variant.is_some() {
            tc.target_variant = other.target_variant;
        }
    }
}

/// Load merged toolchain configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.mooring/toolchain.toml)
/// 2. Global config (~/.mooring/toolchain.toml)
/// 3. Defaults
pub fn load_toolchain_config(global_path: &Path, project_path: &Path) -> ToolchainConfig {
    let mut config = ToolchainConfig::default();

    if global_path.exists() {
        tracing::debug!("Loading global toolchain config: {}", global_path.display());
        config.merge(ToolchainConfig::load_or_default(global_path));
    }

    if project_path.exists() {
        tracing::debug!("Loading project toolchain config: {}", project_path.display());
        config.merge(ToolchainConfig::load_or_default(project_path));
    }

    config
}

/// Get the global mooring config directory (~/.mooring).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".mooring"))
}

/// Get the global toolchain config path (~/.mooring/toolchain.toml).
pub fn global_toolchain_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("toolchain.toml"))
}

/// Get the project toolchain config path (.mooring/toolchain.toml).
pub fn project_toolchain_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".mooring").join("toolchain.toml")
}

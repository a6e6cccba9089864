//! Implementation of `mooring target-info`.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{Triple, VirtualPath};
use crate::executor::{ExecutionError, JobExecutor};
use crate::job::{decode_target_info, DecodeError, FrontendTargetInfo};
use crate::toolchain::{TargetInfoQuery, ToolResolutionError, ToolResolver, Toolchain};
use crate::util::config::ToolchainConfig;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Options for the target-info command.
///
/// Anything left unset falls back to the toolchain config.
#[derive(Debug, Clone, Default)]
pub struct TargetInfoOptions {
    pub target: Option<Triple>,
    pub target_variant: Option<Triple>,
    pub sdk: Option<PathBuf>,
    pub resource_dir: Option<PathBuf>,
    /// Replace this process with the frontend
    pub in_place: bool,
}

impl TargetInfoOptions {
    /// Combine these options with config defaults into a query.
    pub fn to_query(&self, config: &ToolchainConfig) -> TargetInfoQuery {
        let tc = &config.toolchain;
        TargetInfoQuery {
            target: self.target.clone().or_else(|| tc.target.clone()),
            target_variant: self
                .target_variant
                .clone()
                .or_else(|| tc.target_variant.clone()),
            sdk_path: self
                .sdk
                .clone()
                .or_else(|| tc.sdk.clone())
                .map(VirtualPath::from_path),
            resource_dir_path: self
                .resource_dir
                .clone()
                .or_else(|| tc.resource_dir.clone())
                .map(VirtualPath::from_path),
            requires_in_place_execution: self.in_place,
        }
    }
}

/// Error from querying target info end to end.
#[derive(Debug, Error)]
pub enum TargetInfoError {
    #[error(transparent)]
    ToolResolution(#[from] ToolResolutionError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl TargetInfoError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TargetInfoError::ToolResolution(err) => {
                let mut diag = Diagnostic::error(err.to_string());
                if let ToolResolutionError::ConfiguredPathMissing { .. } = err {
                    diag = diag.with_suggestion(suggestions::FIX_CONFIGURED_FRONTEND);
                } else {
                    diag = diag
                        .with_suggestion(suggestions::SET_FRONTEND_ENV)
                        .with_suggestion(suggestions::INSTALL_TOOLCHAIN);
                }
                diag
            }

            TargetInfoError::Execution(err) => {
                let mut diag = Diagnostic::error(err.to_string());
                if let ExecutionError::Failed { .. } = err {
                    diag = diag.with_suggestion(suggestions::CHECK_TARGET);
                }
                diag
            }

            TargetInfoError::Decode(err) => {
                let mut diag = Diagnostic::error(err.to_string());
                if let DecodeError::Malformed { source, .. } = err {
                    diag = diag.with_context(source.to_string());
                }
                diag.with_suggestion(suggestions::CHECK_FRONTEND_VERSION)
            }
        }
    }
}

/// Ask the frontend for target information.
///
/// Builds the job, runs it once and decodes what it printed. Nothing is
/// retried.
pub fn target_info(
    toolchain: &dyn ToolResolver,
    executor: &dyn JobExecutor,
    query: &TargetInfoQuery,
) -> Result<FrontendTargetInfo, TargetInfoError> {
    let job = toolchain.target_info_job(query)?;
    tracing::debug!("Querying target info: {}", job.display_command());

    let stdout = executor.execute(&job)?;
    let info = decode_target_info(&stdout)?;

    tracing::info!("Target: {}", info.target.triple);
    if let Some(ref variant) = info.target_variant {
        tracing::info!("Target variant: {}", variant.triple);
    }

    Ok(info)
}

//! Mooring - query a compiler frontend for target information
//!
//! This crate describes the `-print-target-info` frontend invocation as an
//! immutable [`Job`], runs it through a [`JobExecutor`], and decodes the
//! JSON the frontend prints into [`FrontendTargetInfo`].

pub mod core;
pub mod executor;
pub mod job;
pub mod ops;
pub mod toolchain;
pub mod util;

/// Test utilities and mocks for Mooring unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides mock toolchains and executors.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{FileType, Triple, VirtualPath};
pub use executor::{ExecutionError, JobExecutor, ProcessExecutor};
pub use job::{
    decode_target_info, encode_target_info, ArgTemplate, DecodeError, FrontendTargetInfo, Job,
    JobKind, Paths, Target, TypedVirtualPath,
};
pub use toolchain::{
    SystemToolchain, TargetInfoQuery, Tool, ToolResolutionError, ToolResolver, Toolchain,
};

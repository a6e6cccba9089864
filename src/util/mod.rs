//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod process;

pub use config::ToolchainConfig;
pub use diagnostic::Diagnostic;

//! High-level operations.
//!
//! This module contains the implementation of Mooring commands.

pub mod mooring_target_info;

pub use mooring_target_info::{target_info, TargetInfoError, TargetInfoOptions};

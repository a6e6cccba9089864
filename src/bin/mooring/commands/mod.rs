//! Command implementations

pub mod completions;
pub mod target_info;
pub mod toolchain;

//! Core value types shared by jobs, toolchains and executors.

pub mod file_type;
pub mod path;
pub mod triple;

pub use file_type::FileType;
pub use path::VirtualPath;
pub use triple::Triple;

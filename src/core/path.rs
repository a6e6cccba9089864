//! Abstract path references used by jobs.
//!
//! A job never touches the filesystem itself, so paths are described
//! rather than resolved: an absolute or relative location, a temporary
//! file, or one of the standard streams.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A path as seen by a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum VirtualPath {
    /// An absolute filesystem path
    Absolute(PathBuf),
    /// A path relative to the working directory of the job
    Relative(PathBuf),
    /// A file the executor creates and removes around the job
    Temporary(PathBuf),
    /// The process's standard input
    StandardInput,
    /// The process's standard output
    StandardOutput,
}

impl VirtualPath {
    /// Classify a concrete path as absolute or relative.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_absolute() {
            VirtualPath::Absolute(path)
        } else {
            VirtualPath::Relative(path)
        }
    }

    /// The underlying filesystem path, if this names a file.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            VirtualPath::Absolute(p) | VirtualPath::Relative(p) | VirtualPath::Temporary(p) => {
                Some(p)
            }
            VirtualPath::StandardInput | VirtualPath::StandardOutput => None,
        }
    }

    /// Whether this refers to one of the standard streams.
    pub fn is_standard_stream(&self) -> bool {
        matches!(
            self,
            VirtualPath::StandardInput | VirtualPath::StandardOutput
        )
    }

    /// Form passed on a command line, byte for byte. Standard streams
    /// render as `-`.
    pub fn to_os_string(&self) -> OsString {
        match self.as_path() {
            Some(p) => p.as_os_str().to_os_string(),
            None => OsString::from("-"),
        }
    }

    /// Human-readable form for logs and messages. Non-UTF-8 paths are
    /// shown lossily; use [`VirtualPath::to_os_string`] for argv.
    pub fn name(&self) -> String {
        match self.as_path() {
            Some(p) => p.display().to_string(),
            None => "-".to_string(),
        }
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_classifies() {
        let rel = VirtualPath::from_path("sdk/MacOSX.sdk");
        assert!(matches!(rel, VirtualPath::Relative(_)));

        let abs = VirtualPath::from_path(std::env::temp_dir());
        assert!(matches!(abs, VirtualPath::Absolute(_)));
    }

    #[test]
    fn test_standard_streams_render_as_dash() {
        assert_eq!(VirtualPath::StandardOutput.name(), "-");
        assert_eq!(VirtualPath::StandardInput.to_string(), "-");
        assert!(VirtualPath::StandardOutput.is_standard_stream());
        assert!(VirtualPath::StandardOutput.as_path().is_none());
    }

    #[test]
    fn test_file_paths_render_verbatim() {
        let path = VirtualPath::Relative(PathBuf::from("lib/swift"));
        assert_eq!(path.name(), PathBuf::from("lib/swift").display().to_string());
        assert!(!path.is_standard_stream());
        assert_eq!(path.to_os_string(), "lib/swift");
        assert_eq!(VirtualPath::StandardInput.to_os_string(), "-");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_keeps_its_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/tmp/sdk-\xff");
        let path = VirtualPath::Absolute(PathBuf::from(raw));
        assert_eq!(path.to_os_string().as_bytes(), b"/tmp/sdk-\xff");
        assert_eq!(path.name(), "/tmp/sdk-\u{fffd}");
    }
}

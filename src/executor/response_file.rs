//! Response files.
//!
//! When a job allows it and its argument list is too long for the
//! platform, the arguments are written to a file (one per line, quoted
//! where needed) and the tool receives a single `@file` argument instead.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Default argument-list size, in bytes, above which a response file is used.
pub const DEFAULT_RESPONSE_FILE_LIMIT: usize = 32 * 1024;

/// Whether `args` are too long to pass directly.
pub fn needs_response_file(args: &[OsString], limit: usize) -> bool {
    // Each argument costs its bytes plus a separator.
    let len: usize = args.iter().map(|a| a.len() + 1).sum();
    len > limit
}

/// Quote an argument so the tool's response-file reader gets it back intact.
///
/// Works on the argument's bytes so that paths which are not valid UTF-8
/// are written unchanged.
pub fn quote_argument(arg: &OsStr) -> Vec<u8> {
    let bytes = arg.as_encoded_bytes();
    let needs_quotes = bytes.is_empty()
        || bytes
            .iter()
            .any(|&b| b.is_ascii_whitespace() || matches!(b, b'"' | b'\'' | b'\\'));
    if !needs_quotes {
        return bytes.to_vec();
    }

    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    for &b in bytes {
        if b == b'"' || b == b'\\' {
            quoted.push(b'\\');
        }
        quoted.push(b);
    }
    quoted.push(b'"');
    quoted
}

/// Render the contents of a response file.
pub fn contents(args: &[OsString]) -> Vec<u8> {
    let mut out = Vec::new();
    for arg in args {
        out.extend(quote_argument(arg));
        out.push(b'\n');
    }
    out
}

/// Write `args` to a new temporary response file in `dir`.
pub fn write(args: &[OsString], dir: &Path) -> io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("arguments-")
        .suffix(".resp")
        .tempfile_in(dir)?;
    file.write_all(&contents(args))?;
    file.flush()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_needs_response_file() {
        let args = os_args(&["-frontend", "-print-target-info"]);
        assert!(!needs_response_file(&args, DEFAULT_RESPONSE_FILE_LIMIT));
        assert!(needs_response_file(&args, 10));
        assert!(!needs_response_file(&[], 0));
    }

    #[test]
    fn test_quote_argument() {
        let quote = |s: &str| String::from_utf8(quote_argument(OsStr::new(s))).unwrap();
        assert_eq!(quote("-sdk"), "-sdk");
        assert_eq!(quote("/Library/My SDKs"), "\"/Library/My SDKs\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("C:\\sdk"), "\"C:\\\\sdk\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_write_keeps_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = os_args(&["-frontend", "-sdk", "/path with space"]);

        let file = write(&args, dir.path()).unwrap();
        let text = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(text, "-frontend\n-sdk\n\"/path with space\"\n");
        assert!(file
            .path()
            .extension()
            .is_some_and(|ext| ext == "resp"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_written_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::TempDir::new().unwrap();
        let args = vec![
            OsString::from("-sdk"),
            OsStr::from_bytes(b"/tmp/sdk-\xff").to_os_string(),
        ];

        let file = write(&args, dir.path()).unwrap();
        let bytes = std::fs::read(file.path()).unwrap();
        assert_eq!(bytes, b"-sdk\n/tmp/sdk-\xff\n");
    }
}

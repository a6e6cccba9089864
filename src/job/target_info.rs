//! Target information reported by the frontend.
//!
//! `-print-target-info` makes the frontend print a JSON object describing
//! the target it would compile for. Only `target` is required; the
//! frontend also prints keys we do not model (such as `compilerVersion`),
//! and those are ignored.
//!
//! ```json
//! {
//!   "target": {
//!     "triple": "x86_64-apple-macosx10.15",
//!     "unversionedTriple": "x86_64-apple-macosx",
//!     "moduleTriple": "x86_64-apple-macos",
//!     "librariesRequireRPath": false
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use thiserror::Error;

use crate::core::Triple;

/// Description of one target as seen by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// The target triple
    pub triple: Triple,

    /// The target triple without any version information
    pub unversioned_triple: Triple,

    /// The triple used for module names
    pub module_triple: Triple,

    /// Whether the runtime libraries must be found through an rpath in
    /// their system location instead of next to the build products
    #[serde(rename = "librariesRequireRPath")]
    pub libraries_require_rpath: bool,
}

/// Where the compiler's runtime support lives for the queried target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paths {
    pub runtime_library_paths: Vec<String>,
    pub runtime_library_import_paths: Vec<String>,
    pub runtime_resource_path: String,
}

/// The decoded output of a `-print-target-info` job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendTargetInfo {
    pub target: Target,

    /// Present only when the query named a target variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_variant: Option<Target>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Paths>,
}

/// The captured output could not be decoded as target info.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("target info is not well-formed JSON at line {line}, column {column}")]
    Malformed {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("target info does not match the expected shape: {source}")]
    InvalidSchema {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => DecodeError::InvalidSchema { source: err },
            Category::Syntax | Category::Eof | Category::Io => DecodeError::Malformed {
                line: err.line(),
                column: err.column(),
                source: err,
            },
        }
    }
}

/// Decode the captured standard output of a target-info job.
///
/// Either the whole record is valid or an error is returned; triples are
/// passed through exactly as the frontend printed them.
pub fn decode_target_info(bytes: &[u8]) -> Result<FrontendTargetInfo, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode target info in the same JSON shape the frontend prints.
pub fn encode_target_info(info: &FrontendTargetInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(info)
}

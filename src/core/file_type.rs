//! Semantic file-type tags for job inputs and outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a job input or output contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum FileType {
    /// JSON target description printed by `-print-target-info`
    JsonTargetInfo,
}

impl FileType {
    /// Stable name of the file type.
    pub fn name(&self) -> &'static str {
        match self {
            FileType::JsonTargetInfo => "json-target-info",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

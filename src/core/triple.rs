//! Target triples.
//!
//! A triple is kept as the exact text the frontend or the user gave us.
//! Nothing here normalizes or validates it; the frontend owns that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A canonical platform identifier such as `x86_64-apple-macosx10.15`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triple(String);

impl Triple {
    /// Create a triple from its textual form.
    pub fn new(triple: impl Into<String>) -> Self {
        Triple(triple.into())
    }

    /// The triple exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The architecture component (everything before the first `-`).
    pub fn arch(&self) -> &str {
        self.0.split('-').next().unwrap_or("")
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Triple {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Triple::new(s))
    }
}

impl From<&str> for Triple {
    fn from(s: &str) -> Self {
        Triple::new(s)
    }
}

impl From<String> for Triple {
    fn from(s: String) -> Self {
        Triple(s)
    }
}

impl AsRef<str> for Triple {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

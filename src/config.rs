use std::path::Path;

use crate::foundation::error::{FramemapError, FramemapResult};

/// Options shared by every mapping parse mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Clamp or skip out-of-bounds values instead of failing with
    /// `BadValue`.
    pub tolerant: bool,
}

/// Range-transform settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Postfix expression over the `x`, `r`, `y` variables.
    pub expr: String,
    /// Treat a range's upper bound as exclusive in continuous mode.
    pub half_open: bool,
    /// Evaluate every frame instead of the two range boundaries.
    pub discrete: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            expr: "x".to_owned(),
            half_open: true,
            discrete: false,
        }
    }
}

/// File-level configuration for the `framemap` tool.
///
/// Every field is optional in JSON; command-line flags override it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FramemapConfig {
    /// Output frame count for indexed modes.
    pub frames: Option<u32>,
    /// Source frame count bounding every target.
    pub source_frames: Option<u32>,
    /// Parse options.
    pub parse: ParseOptions,
    /// Transform options.
    pub transform: TransformOptions,
}

impl FramemapConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(s: &str) -> FramemapResult<Self> {
        serde_json::from_str(s).map_err(|e| FramemapError::serde(e.to_string()))
    }

    /// Load a JSON configuration file.
    pub fn from_path(path: &Path) -> FramemapResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            FramemapError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

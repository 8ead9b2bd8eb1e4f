//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! resources = "Resources/Icons"   # Root of the `*.symbolset` directories
//! output = "VALUEADD"             # Where `render` writes `<icon-id>.png`
//! ```
//!
//! Relative paths resolve against the manifest's directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resources and output directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory the icon `source` paths are relative to.
    pub resources: PathBuf,

    /// Output directory for rendered PNGs.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            resources: PathBuf::from(
                "Sources/SVGAssetConverter/Resources/Media.xcassets/Icons4EmbeddedWidgets",
            ),
            output: PathBuf::from("."),
        }
    }
}

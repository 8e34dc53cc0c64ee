//! `[output]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Destination directories receiving the generated sitemap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directories to write sitemap.xml into, absolute or relative to the
    /// project root. CLI positional arguments take precedence.
    pub targets: Vec<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            targets: vec![PathBuf::from("public")],
        }
    }
}

//! Export configuration
//!
//! Loaded from `.side-export.yaml` next to the project (or `--config`).
//! Every field has a default, so an empty file is a valid configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up next to a `.side` project
pub const CONFIG_FILE: &str = ".side-export.yaml";

/// Settings shared by the emitters and the file assembler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Indentation unit for one level
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Appended to the suite name to form the class name
    #[serde(default = "default_class_suffix")]
    pub class_suffix: String,

    /// Emit the provenance header
    #[serde(default = "default_true")]
    pub provenance: bool,

    /// Timeout passed to `waitForText` (the command records none)
    #[serde(default = "default_wait_for_text_timeout")]
    pub wait_for_text_timeout: u64,

    /// Used when a window-opening command records no timeout
    #[serde(default = "default_window_timeout")]
    pub default_window_timeout: u64,
}

fn default_indent() -> String {
    "    ".to_string()
}

fn default_class_suffix() -> String {
    "Cest".to_string()
}

fn default_true() -> bool {
    true
}

fn default_wait_for_text_timeout() -> u64 {
    30000
}

fn default_window_timeout() -> u64 {
    2000
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            class_suffix: default_class_suffix(),
            provenance: true,
            wait_for_text_timeout: default_wait_for_text_timeout(),
            default_window_timeout: default_window_timeout(),
        }
    }
}

impl ExportConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(Error::Yaml)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
            .map_err(|e| Error::Other(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load `.side-export.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let file = dir.join(CONFIG_FILE);
        if !file.exists() {
            return Ok(None);
        }
        Self::load(&file).map(Some)
    }
}

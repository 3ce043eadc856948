//! Chart manifest reading
//!
//! The manifest (`Chart.yaml`) is read as line-oriented `key: value`
//! text: for a requested key, the value is everything after the first
//! colon of the first matching line, trimmed. Only top-level scalar
//! fields are reachable this way, which is all this tool needs.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};
use crate::version::ChartVersion;

/// Manifest filename inside a chart directory.
pub const CHART_MANIFEST: &str = "Chart.yaml";

/// Version assumed when a chart declares none.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// A loaded chart manifest.
#[derive(Debug, Clone)]
pub struct ChartFile {
    /// Path the manifest was read from
    pub path: PathBuf,
    lines: Vec<String>,
}

impl ChartFile {
    /// Load the manifest from a chart directory.
    pub fn load(chart_dir: &Path) -> Result<Self> {
        Self::load_file(&chart_dir.join(CHART_MANIFEST))
    }

    /// Load a manifest from an explicit file path.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CoreError::ChartNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: content.lines().map(String::from).collect(),
        })
    }

    /// Look up a top-level attribute by key.
    pub fn attribute(&self, key: &str) -> Option<String> {
        let prefix = format!("{}:", key);
        self.lines
            .iter()
            .find(|line| line.starts_with(&prefix))
            .map(|line| line[prefix.len()..].trim().to_string())
    }

    /// Look up an attribute, substituting a default when absent.
    pub fn attribute_or(&self, key: &str, default: &str) -> String {
        self.attribute(key).unwrap_or_else(|| default.to_string())
    }

    /// Look up an attribute that must be present.
    pub fn require(&self, key: &str) -> Result<String> {
        self.attribute(key).ok_or_else(|| CoreError::MissingField {
            field: key.to_string(),
        })
    }

    /// The declared chart name. Required.
    pub fn name(&self) -> Result<String> {
        self.require("name")
    }

    /// The declared base version, `0.0.0` when absent.
    pub fn version(&self) -> Result<ChartVersion> {
        ChartVersion::parse(&self.attribute_or("version", DEFAULT_VERSION))
    }
}

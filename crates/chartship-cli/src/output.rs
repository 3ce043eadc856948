//! CI output lines
//!
//! The invoking CI job consumes `<key>::<value>` lines from stdout;
//! the same values are mirrored as plain diagnostic lines for humans
//! reading the build log.

use std::path::Path;

use chartship_core::ChartVersion;

/// The published-package facts handed back to the CI system.
#[derive(Debug, Clone)]
pub struct PublishOutputs {
    pub package_filename: String,
    pub package_filepath: String,
    pub package_version: String,
    pub package_major_version: u64,
    pub package_minor_version: u64,
}

impl PublishOutputs {
    pub fn new(filename: &str, filepath: &Path, version: &str, base: ChartVersion) -> Self {
        Self {
            package_filename: filename.to_string(),
            package_filepath: filepath.display().to_string(),
            package_version: version.to_string(),
            package_major_version: base.major,
            package_minor_version: base.minor,
        }
    }

    /// Print the machine-readable lines followed by their plain mirrors.
    pub fn emit(&self) {
        for (key, value) in self.pairs() {
            println!("{}::{}", key, value);
        }
        for (key, value) in self.pairs() {
            println!("{} = {}", key, value);
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("package_filename", self.package_filename.clone()),
            ("package_filepath", self.package_filepath.clone()),
            ("package_version", self.package_version.clone()),
            (
                "package_major_version",
                self.package_major_version.to_string(),
            ),
            (
                "package_minor_version",
                self.package_minor_version.to_string(),
            ),
        ]
    }
}

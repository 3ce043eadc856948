//! Package filename grammar
//!
//! Published archives follow a fixed naming scheme:
//!
//! ```text
//! widget-0.1.27.tgz
//! widget-0.1.27.tgz.prov
//! widget-0.1.27-pre.20220629.4.tgz
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CoreError, Result};
use crate::version::ChartVersion;

static PACKAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>.+)-(?P<version>\d+\.\d+\.\d+)(?P<pre>-pre\.[0-9.]+)?\.tgz(?P<prov>\.prov)?$")
        .expect("valid package filename regex")
});

/// A parsed repository package filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFilename {
    /// Chart name portion
    pub chart: String,
    /// Base version triple (prerelease tag excluded)
    pub version: ChartVersion,
    /// Whether the entry carries a `-pre.<build>` tag
    pub prerelease: bool,
    /// Whether the entry is a provenance file
    pub provenance: bool,
}

/// Parse a repository listing entry against the fixed filename pattern.
pub fn parse_package_filename(name: &str) -> Result<PackageFilename> {
    let caps = PACKAGE_RE
        .captures(name)
        .ok_or_else(|| CoreError::InvalidPackageFilename {
            name: name.to_string(),
        })?;

    let version = ChartVersion::parse(&caps["version"])?;

    Ok(PackageFilename {
        chart: caps["name"].to_string(),
        version,
        prerelease: caps.name("pre").is_some(),
        provenance: caps.name("prov").is_some(),
    })
}

/// The deterministic archive name for a chart at a computed version.
pub fn package_filename(chart_name: &str, version: &str) -> String {
    format!("{}-{}.tgz", chart_name, version)
}

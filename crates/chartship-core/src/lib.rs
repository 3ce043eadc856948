//! Chartship Core - value types for chart versioning and publishing
//!
//! This crate provides the foundational types used throughout chartship:
//! - `ChartFile`: the chart manifest (Chart.yaml) reader
//! - `ChartVersion`: the ordered `major.minor.patch` triple
//! - `PackageFilename`: the fixed repository archive naming scheme

pub mod chart;
pub mod error;
pub mod filename;
pub mod version;

pub use chart::{ChartFile, CHART_MANIFEST, DEFAULT_VERSION};
pub use error::{CoreError, Result};
pub use filename::{package_filename, parse_package_filename, PackageFilename};
pub use version::{next_version, ChartVersion};

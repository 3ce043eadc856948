//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Chart manifest not found: {path}")]
    ChartNotFound { path: String },

    #[error("Missing required field in Chart.yaml: {field}")]
    MissingField { field: String },

    #[error("Invalid version '{value}': {message}")]
    InvalidVersion { value: String, message: String },

    #[error("Package filename does not match '<name>-<X.Y.Z>[-pre.<build>].tgz[.prov]': {name}")]
    InvalidPackageFilename { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

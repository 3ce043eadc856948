//! CLI error types with exit code handling
//!
//! Every fatal condition ends the process; this module maps each one
//! to its exit code. Packaging failures propagate helm's own code,
//! everything else exits 1.

#![allow(dead_code)] // Some variants/constructors are for future use

use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// Chart manifest error (missing file, missing field, bad version)
    #[error("Chart error: {message}")]
    #[diagnostic(code(chartship::cli::chart))]
    Chart { message: String },

    /// Repository error (query, auth, or publish failure)
    #[error("Repository error: {message}")]
    #[diagnostic(code(chartship::cli::repo))]
    Repo { message: String },

    /// Packaging command failed; carries helm's exit code
    #[error("helm package exited with code {code}")]
    #[diagnostic(code(chartship::cli::package))]
    PackageFailed { code: i32 },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(chartship::cli::io))]
    Io { message: String },

    /// Internal error (runtime, unexpected failure)
    #[error("Internal error: {message}")]
    #[diagnostic(code(chartship::cli::internal))]
    Internal { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::PackageFailed { code } => *code,
            _ => exit_codes::ERROR,
        }
    }

    /// Create a chart manifest error
    pub fn chart(message: impl Into<String>) -> Self {
        Self::Chart {
            message: message.into(),
        }
    }

    /// Create a repository error
    pub fn repo(message: impl Into<String>) -> Self {
        Self::Repo {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

impl From<chartship_core::CoreError> for CliError {
    fn from(err: chartship_core::CoreError) -> Self {
        CliError::Chart {
            message: err.to_string(),
        }
    }
}

impl From<chartship_repo::RepoError> for CliError {
    fn from(err: chartship_repo::RepoError) -> Self {
        CliError::Repo {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

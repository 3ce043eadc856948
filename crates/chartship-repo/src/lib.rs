//! Chartship Repository Client
//!
//! This crate talks to the chart repository over HTTP:
//!
//! - **Credentials**: basic auth, resolved from explicit values or
//!   environment variable references before any network traffic
//! - **Version resolution**: list the published versions in a chart's
//!   major.minor line and find the highest
//! - **Publishing**: upload a packaged archive with a single PUT
//!
//! ## Example
//!
//! ```rust,no_run
//! use chartship_core::ChartVersion;
//! use chartship_repo::{Credentials, RepoClient, VersionResolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env("ARTIFACTORY_USER", "ARTIFACTORY_TOKEN").resolve()?;
//! let client = RepoClient::new(creds)?;
//!
//! let resolver = VersionResolver::new(&client, "https://repo.example.com/charts");
//! let highest = resolver
//!     .resolve_highest("widget", ChartVersion::new(1, 2, 3))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod listing;
pub mod publisher;
pub mod resolver;

// Re-exports for convenience
pub use client::{join_url, RepoClient, RepoResponse};
pub use credentials::{Credentials, ResolvedCredentials};
pub use error::{RepoError, Result};
pub use listing::listing_entries;
pub use publisher::Publisher;
pub use resolver::VersionResolver;

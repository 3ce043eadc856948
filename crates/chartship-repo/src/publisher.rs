//! Chart publisher
//!
//! Uploads a packaged archive to the repository with a single PUT.
//! The repository answers 201 when the artifact was stored; anything
//! else is fatal. No retry, no partial-upload resume.

use std::path::Path;

use chartship_core::ChartVersion;

use crate::client::{join_url, RepoClient};
use crate::error::{RepoError, Result};

/// Publishes packaged charts to the repository
pub struct Publisher<'a> {
    client: &'a RepoClient,
    base_url: &'a str,
}

impl<'a> Publisher<'a> {
    pub fn new(client: &'a RepoClient, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Upload an archive to `<base>/<chart>/<major>/<minor>/<filename>`.
    pub async fn publish(
        &self,
        chart_name: &str,
        version: ChartVersion,
        filename: &str,
        archive_path: &Path,
    ) -> Result<()> {
        let data = std::fs::read(archive_path)?;

        let url = join_url(
            self.base_url,
            &[
                chart_name,
                &version.major.to_string(),
                &version.minor.to_string(),
                filename,
            ],
        );

        tracing::debug!("publishing {} ({} bytes) to {}", filename, data.len(), url);
        let response = self.client.put(&url, data).await?;

        if response.status != 201 {
            return Err(RepoError::PublishFailed {
                filename: filename.to_string(),
                status: response.status,
                body: response.body,
            });
        }

        Ok(())
    }
}

//! Authenticated HTTP client for the chart repository

use crate::credentials::ResolvedCredentials;
use crate::error::{RepoError, Result};

/// A plain HTTP response: status code and body text.
#[derive(Debug)]
pub struct RepoResponse {
    pub status: u16,
    pub body: String,
}

impl RepoResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client with basic-auth credentials attached to every request
pub struct RepoClient {
    client: reqwest::Client,
    credentials: ResolvedCredentials,
}

impl RepoClient {
    /// Create a new client with resolved credentials
    pub fn new(credentials: ResolvedCredentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RepoError::NetworkError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Authenticated GET, returning status and body without
    /// interpreting the status code.
    pub async fn get(&self, url: &str) -> Result<RepoResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;

        Self::into_repo_response(url, response).await
    }

    /// Authenticated PUT with a raw byte body.
    pub async fn put(&self, url: &str, body: Vec<u8>) -> Result<RepoResponse> {
        tracing::debug!("PUT {} ({} bytes)", url, body.len());
        let response = self
            .client
            .put(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .body(body)
            .send()
            .await?;

        Self::into_repo_response(url, response).await
    }

    async fn into_repo_response(url: &str, response: reqwest::Response) -> Result<RepoResponse> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RepoError::AuthRequired {
                url: url.to_string(),
            });
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(RepoError::AuthFailed {
                message: format!("Access denied to {}", url),
            });
        }

        let body = response.text().await.map_err(|e| RepoError::NetworkError {
            message: e.to_string(),
        })?;

        Ok(RepoResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Join a repository base URL with path segments.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment);
    }
    url
}

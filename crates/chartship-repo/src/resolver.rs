//! Version resolver
//!
//! Queries the repository for the versions already published in a
//! chart's major.minor line and answers the highest one.

use chartship_core::{parse_package_filename, ChartVersion};

use crate::client::{join_url, RepoClient};
use crate::error::{RepoError, Result};
use crate::listing::listing_entries;

/// Resolves the highest published version for a chart
pub struct VersionResolver<'a> {
    client: &'a RepoClient,
    base_url: &'a str,
}

impl<'a> VersionResolver<'a> {
    pub fn new(client: &'a RepoClient, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Find the highest version published in the floor's major.minor
    /// line. The floor (the chart's own declared version) is the
    /// starting maximum, so the answer is never below it.
    ///
    /// A 404 means nothing was published in this line yet; any status
    /// other than 200/404 is fatal with the response body surfaced.
    pub async fn resolve_highest(
        &self,
        chart_name: &str,
        floor: ChartVersion,
    ) -> Result<ChartVersion> {
        let url = join_url(
            self.base_url,
            &[
                chart_name,
                &floor.major.to_string(),
                &floor.minor.to_string(),
            ],
        );

        let response = self.client.get(&url).await?;

        match response.status {
            200 => {
                tracing::debug!("found existing charts for {}", chart_name);
                let mut highest = floor;
                for entry in listing_entries(&response.body) {
                    let parsed = parse_package_filename(&entry).map_err(|source| {
                        RepoError::InvalidListingEntry {
                            entry: entry.clone(),
                            source,
                        }
                    })?;
                    tracing::debug!("published entry {} -> {}", entry, parsed.version);
                    if parsed.version > highest {
                        highest = parsed.version;
                    }
                }
                Ok(highest)
            }
            404 => {
                tracing::debug!(
                    "no charts published for {} {}.{}, using declared version",
                    chart_name,
                    floor.major,
                    floor.minor
                );
                Ok(floor)
            }
            status => Err(RepoError::UnexpectedStatus {
                url,
                status,
                body: response.body,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use wiremock::matchers::{basic_auth, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> RepoClient {
        RepoClient::new(Credentials::basic("ci", "token").resolve().unwrap()).unwrap()
    }

    fn listing_html(entries: &[&str]) -> String {
        let mut body = String::from("<html><body><pre><a href=\"../\">../</a>\n");
        for entry in entries {
            body.push_str(&format!("<a href=\"{e}\">{e}</a>\n", e = entry));
        }
        body.push_str("</pre></body></html>");
        body
    }

    #[tokio::test]
    async fn test_404_answers_floor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widget/1/2"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client();
        let uri = server.uri();
        let resolver = VersionResolver::new(&client, &uri);
        let highest = resolver
            .resolve_highest("widget", ChartVersion::new(1, 2, 3))
            .await
            .unwrap();
        assert_eq!(highest, ChartVersion::new(1, 2, 3));
    }

    #[tokio::test]
    async fn test_listing_maximum_wins_over_floor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widget/1/2"))
            .and(basic_auth("ci", "token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&[
                "widget-1.2.5.tgz",
                "widget-1.2.5.tgz.prov",
                "widget-1.2.9-pre.20220629.4.tgz",
                "widget-1.2.7.tgz",
            ])))
            .mount(&server)
            .await;

        let client = client();
        let uri = server.uri();
        let resolver = VersionResolver::new(&client, &uri);
        let highest = resolver
            .resolve_highest("widget", ChartVersion::new(1, 2, 3))
            .await
            .unwrap();
        // The prerelease entry contributes its base triple
        assert_eq!(highest, ChartVersion::new(1, 2, 9));
    }

    #[tokio::test]
    async fn test_floor_wins_over_lower_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widget/1/2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(listing_html(&["widget-1.2.1.tgz"])),
            )
            .mount(&server)
            .await;

        let client = client();
        let uri = server.uri();
        let resolver = VersionResolver::new(&client, &uri);
        let highest = resolver
            .resolve_highest("widget", ChartVersion::new(1, 2, 3))
            .await
            .unwrap();
        assert_eq!(highest, ChartVersion::new(1, 2, 3));
    }

    #[tokio::test]
    async fn test_unexpected_status_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widget/1/2"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let client = client();
        let uri = server.uri();
        let resolver = VersionResolver::new(&client, &uri);
        let err = resolver
            .resolve_highest("widget", ChartVersion::new(1, 2, 3))
            .await
            .unwrap_err();
        match err {
            RepoError::UnexpectedStatus { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "backend exploded");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_listing_entry_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widget/1/2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(listing_html(&["widget-not-a-version.tgz"])),
            )
            .mount(&server)
            .await;

        let client = client();
        let uri = server.uri();
        let resolver = VersionResolver::new(&client, &uri);
        let err = resolver
            .resolve_highest("widget", ChartVersion::new(1, 2, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::InvalidListingEntry { .. }));
    }
}

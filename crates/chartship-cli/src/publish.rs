//! The publish pipeline
//!
//! Sequential, top to bottom: read the chart manifest, resolve the
//! highest published version in its major.minor line, compute the
//! next version, package with helm, upload. The first fatal error
//! ends the run; nothing is retried.

use std::path::Path;

use console::style;

use chartship_core::{next_version, package_filename, ChartFile};
use chartship_repo::{Credentials, Publisher, RepoClient, VersionResolver};

use crate::error::Result;
use crate::output::PublishOutputs;
use crate::packager::package_chart;

/// Environment variables holding the repository credentials.
pub const USERNAME_VAR: &str = "ARTIFACTORY_USER";
pub const TOKEN_VAR: &str = "ARTIFACTORY_TOKEN";

#[allow(clippy::too_many_arguments)]
pub async fn run(
    chart_dir: &Path,
    working_dir: &Path,
    build_number: &str,
    prerelease: bool,
    app_version: &str,
    repo_url: &str,
    helm_bin: &str,
) -> Result<()> {
    println!("build_number = {}", build_number);
    println!("is_prerelease = {}", prerelease);
    println!("application_version = {}", app_version);

    // Chart manifest comes first so a broken chart fails before any
    // credentials are touched or network traffic happens
    let chart = ChartFile::load(chart_dir)?;
    let chart_name = chart.name()?;
    let chart_version = chart.version()?;

    println!("Chart name: {}", chart_name);
    println!("Chart version: {}", chart_version);

    let credentials = Credentials::from_env(USERNAME_VAR, TOKEN_VAR).resolve()?;
    let client = RepoClient::new(credentials)?;

    // Highest published version in this major.minor line, floored at
    // the chart's own declared version
    let resolver = VersionResolver::new(&client, repo_url);
    let highest = resolver.resolve_highest(&chart_name, chart_version).await?;
    println!("Highest version: {}", highest);

    let updated_version = next_version(highest, prerelease, build_number);
    println!("Updated version: {}", updated_version);

    package_chart(helm_bin, chart_dir, &updated_version, app_version, working_dir).await?;

    // The archive name is derived, never read back from helm output
    let filename = package_filename(&chart_name, &updated_version);
    let filepath = working_dir.join(&filename);

    let outputs = PublishOutputs::new(&filename, &filepath, &updated_version, highest);
    outputs.emit();

    let publisher = Publisher::new(&client, repo_url);
    publisher
        .publish(&chart_name, highest, &filename, &filepath)
        .await?;

    println!(
        "{} {} v{}",
        style("Published").green().bold(),
        chart_name,
        updated_version
    );

    Ok(())
}

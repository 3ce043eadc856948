//! Chartship CLI - version, package, and publish Helm charts from CI

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod error;
mod exit_codes;
mod output;
mod packager;
mod publish;

#[derive(Parser)]
#[command(name = "chartship")]
#[command(author = "Chartship Contributors")]
#[command(version)]
#[command(about = "Version, package, and publish Helm charts from CI", long_about = None)]
struct Cli {
    /// Chart directory (containing Chart.yaml)
    chart_dir: PathBuf,

    /// Working directory the packaged archive is written to
    working_dir: PathBuf,

    /// CI build number, used as the prerelease build tag
    build_number: String,

    /// Prerelease flag; the literal "true" enables a prerelease build
    prerelease: String,

    /// Application version embedded in the packaged chart
    app_version: String,

    /// Repository base URL charts are resolved against and published to
    #[arg(long, env = "CHARTSHIP_REPO_URL")]
    repo_url: String,

    /// Helm binary to package with
    #[arg(long, default_value = "helm", env = "CHARTSHIP_HELM")]
    helm: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    miette::set_panic_hook();

    let cli = Cli::parse();
    let prerelease = cli.prerelease == "true";

    match publish::run(
        &cli.chart_dir,
        &cli.working_dir,
        &cli.build_number,
        prerelease,
        &cli.app_version,
        &cli.repo_url,
        &cli.helm,
    )
    .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code().clamp(1, 255) as u8;
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}

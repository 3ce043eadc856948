//! External helm packaging
//!
//! Runs `helm package` as a structured argument list (never through a
//! shell) so chart paths and version strings cannot smuggle shell
//! syntax into the command.

use std::path::Path;
use std::process::Stdio;

use console::style;
use tokio::process::Command;

use crate::error::{CliError, Result};

/// Package a chart directory into `<destination>/<name>-<version>.tgz`.
///
/// A non-zero helm exit is fatal: both output streams are surfaced
/// and the error carries helm's own exit code.
pub async fn package_chart(
    helm_bin: &str,
    chart_dir: &Path,
    version: &str,
    app_version: &str,
    destination: &Path,
) -> Result<()> {
    println!(
        "{} {} v{}",
        style("Packaging").cyan().bold(),
        chart_dir.display(),
        version
    );

    let output = Command::new(helm_bin)
        .arg("package")
        .arg(chart_dir)
        .arg("--version")
        .arg(version)
        .arg("--app-version")
        .arg(app_version)
        .arg("--destination")
        .arg(destination)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| {
            CliError::internal(format!("failed to run {}: {}", helm_bin, e))
        })?;

    if !output.status.success() {
        // Exit by signal has no code; fall back to 1
        let code = output.status.code().unwrap_or(1);
        println!("process return code = {}", code);
        println!("stdout = {}", String::from_utf8_lossy(&output.stdout));
        println!("stderr = {}", String::from_utf8_lossy(&output.stderr));
        return Err(CliError::PackageFailed { code });
    }

    Ok(())
}

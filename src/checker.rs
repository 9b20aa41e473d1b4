//! External link checker invocation
//!
//! Runs lychee as a subprocess against the current directory and
//! captures its JSON report from stdout.

use anyhow::{Context, Result};
use tokio::process::Command;

/// External link checker binary, resolved via PATH.
pub const LINK_CHECKER: &str = "lychee";

/// Fixed invocation: JSON report over the current directory.
const LINK_CHECKER_ARGS: &[&str] = &["--format=json", "."];

/// Run the link checker and return its stdout as text.
///
/// The checker's exit status is ignored: lychee exits non-zero whenever
/// it finds broken links, and that report is exactly what gets parsed
/// downstream. Only a failure to spawn the process at all is an error.
pub async fn run_link_checker() -> Result<String> {
    let output = Command::new(LINK_CHECKER)
        .args(LINK_CHECKER_ARGS)
        .output()
        .await
        .with_context(|| format!("Failed to run {}", LINK_CHECKER))?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

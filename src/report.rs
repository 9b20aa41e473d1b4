//! Link checker report schema
//!
//! The subset of lychee's JSON output this tool consumes.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure to parse the checker's output.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid link checker report: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Root of the checker's JSON report.
///
/// Only `error_map` is consumed; lychee's other top-level fields
/// (totals, per-status breakdowns) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkReport {
    /// Broken links grouped by the file that cites them.
    ///
    /// BTreeMap keeps file iteration order deterministic across runs;
    /// the order of entries within a file is preserved as reported.
    pub error_map: BTreeMap<String, Vec<ErrorEntry>>,
}

/// One broken-link entry. Only the URL is consumed; status codes and
/// error details from the checker are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEntry {
    pub url: String,
}

/// Parse the checker's stdout into a report.
pub fn parse_report(raw: &str) -> Result<LinkReport, ReportError> {
    Ok(serde_json::from_str(raw)?)
}

//! annotate flow: map broken URLs back to source lines
//!
//! Rereads each file named in the checker's error map, finds the line
//! citing each broken URL, and prints one CI warning annotation per
//! match to stdout.

use crate::checker::{run_link_checker, LINK_CHECKER};
use crate::report::{parse_report, ErrorEntry};
use anyhow::{Context, Result};
use std::fmt;

/// A warning annotation in GitHub Actions workflow-command form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub file: String,
    pub line: usize,
    pub url: String,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "::warning file={},line={},col=1::Broken URL: {}",
            self.file, self.line, self.url
        )
    }
}

/// Run the full check-and-annotate flow.
///
/// Returns the process exit code: 1 when the checker reported errors
/// for any file (even if no annotation could be matched to a line),
/// 0 otherwise.
pub async fn run_annotate() -> Result<i32> {
    eprintln!("Checking links with {}...", LINK_CHECKER);

    let raw = run_link_checker().await?;
    let report = parse_report(&raw)?;

    let broken_files = report.error_map.len();
    let mut annotated = 0usize;

    for (file, entries) in &report.error_map {
        for annotation in annotate_file(file, entries).await? {
            println!("{}", annotation);
            annotated += 1;
        }
    }

    if broken_files > 0 {
        eprintln!(
            "Found broken URLs in {} file{} ({} annotated)",
            broken_files,
            if broken_files == 1 { "" } else { "s" },
            annotated
        );
        Ok(1)
    } else {
        eprintln!("No broken URLs found");
        Ok(0)
    }
}

/// Locate each entry's URL in `file` and build its annotation.
///
/// At most one annotation per entry, at the first matching line.
/// Entries whose URL never appears in the file produce none.
pub async fn annotate_file(file: &str, entries: &[ErrorEntry]) -> Result<Vec<Annotation>> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file))?;

    let mut annotations = Vec::new();
    for entry in entries {
        if let Some(line) = first_match(&content, &entry.url) {
            annotations.push(Annotation {
                file: file.to_string(),
                line,
                url: entry.url.clone(),
            });
        }
    }

    Ok(annotations)
}

/// 1-based line number of the first line containing `url` as a substring.
pub fn first_match(content: &str, url: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(url))
        .map(|idx| idx + 1)
}

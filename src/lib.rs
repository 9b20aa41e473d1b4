//! link-annotate: CI link-check annotator
//!
//! Flow:
//! - run lychee against the current directory, requesting a JSON report
//! - map each broken URL in the error map back to its source line
//! - print one ::warning annotation per match, exit 1 if any file had errors

pub mod annotate;
pub mod checker;
pub mod report;

pub use annotate::{annotate_file, first_match, run_annotate, Annotation};
pub use report::{parse_report, ErrorEntry, LinkReport, ReportError};

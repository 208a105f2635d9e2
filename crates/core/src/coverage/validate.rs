use tracing::debug;

use crate::coverage::CoverageReport;
use crate::error::{Error, Result};

/// Confirm that the coverage report carries per-line test contexts.
///
/// Only the first file entry is inspected: coverage.py enables dynamic
/// contexts report-wide, so one entry is representative. This is a
/// structural spot-check, not an exhaustive scan.
pub fn validate_structure(report: &CoverageReport) -> Result<()> {
    match report.files.values().next() {
        Some(entry) if entry.contexts.is_none() => Err(Error::CoverageFormat(
            "contexts not found, dynamic context tracking must be enabled. \
             Regenerate the report with:\n    \
             coverage run -m pytest <tests> -o dynamic_context=test_function\n    \
             coverage json -o coverage.json --show-contexts\n\
             See https://coverage.readthedocs.io/en/latest/contexts.html#dynamic-contexts"
                .to_string(),
        )),
        Some(_) => Ok(()),
        None => {
            // Nothing to spot-check; every finding will fail its file
            // lookup downstream.
            debug!("coverage report contains no files");
            Ok(())
        }
    }
}

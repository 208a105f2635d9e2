use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::coverage::CoverageReport;
use crate::error::{Error, Result};
use crate::semgrep::SemgrepReport;

/// Read a JSON document from disk and deserialize it into `T`.
/// No semantic validation happens here; a missing, unreadable, or
/// malformed file surfaces as a `DataFormat` error naming the path.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!(path = %path.display(), "loading JSON report");
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::data_format(path, format!("failed to read file: {e}")))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::data_format(path, format!("malformed JSON: {e}")))
}

/// Load a semgrep `--json` report
pub fn load_semgrep(path: &Path) -> Result<SemgrepReport> {
    load_json(path)
}

/// Load a coverage.py JSON report generated with `--show-contexts`
pub fn load_coverage(path: &Path) -> Result<CoverageReport> {
    load_json(path)
}

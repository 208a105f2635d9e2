use serde::Deserialize;

/// Top-level semgrep `--json` report. Only the fields the correlation
/// engine consumes are modeled; semgrep emits far more and the rest is
/// ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SemgrepReport {
    pub results: Vec<SemgrepResult>,
}

/// One static-analysis finding tied to a file and an inclusive line range.
#[derive(Debug, Clone, Deserialize)]
pub struct SemgrepResult {
    pub check_id: String,
    pub path: String,
    pub start: LinePos,
    pub end: LinePos,
    pub extra: SemgrepExtra,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinePos {
    pub line: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SemgrepExtra {
    /// Stable identity of the finding across scans
    pub fingerprint: String,
    pub message: String,
    /// Raw source snippet for the flagged range, as semgrep captured it
    pub lines: String,
    pub metadata: SemgrepMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SemgrepMetadata {
    pub category: String,
    pub vulnerability_class: Vec<String>,
    pub impact: String,
    pub cwe: Vec<String>,
}

impl SemgrepResult {
    /// The inclusive `[start, end]` line range flagged by the rule.
    /// An inverted range (end < start) yields an empty set, so such a
    /// finding can never match any test case.
    pub fn vulnerable_lines(&self) -> Vec<u64> {
        (self.start.line..=self.end.line).collect()
    }
}

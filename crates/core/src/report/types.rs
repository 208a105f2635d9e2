use serde::Serialize;

use crate::matcher::TestCaseMatch;
use crate::semgrep::SemgrepResult;

/// Run metadata recorded alongside the matched results.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub semgrep_input_file: String,
    pub coverage_input_file: String,
    /// Globally unique identifier of this run
    pub uid: String,
    /// `YYYY-MM-DD HH:MM:SS`, local time
    pub timestamp: String,
    /// Raw count of entries in the semgrep report, before any filtering
    pub number_vulnerabilities_input: usize,
    /// Count of findings retained after exclusion and matching
    pub number_vulnerabilities_matched: usize,
}

/// The finding fields carried into the output report.
#[derive(Debug, Clone, Serialize)]
pub struct SemgrepSummary {
    pub fingerprint: String,
    pub check_id: String,
    pub rule_category: String,
    pub vulnerability_class: Vec<String>,
    pub impact: String,
    pub message: String,
    pub path: String,
    pub cwe: Vec<String>,
    pub lines: String,
    pub vuln_lines: Vec<u64>,
}

impl SemgrepSummary {
    pub(crate) fn from_result(result: &SemgrepResult, vuln_lines: Vec<u64>) -> Self {
        Self {
            fingerprint: result.extra.fingerprint.clone(),
            check_id: result.check_id.clone(),
            rule_category: result.extra.metadata.category.clone(),
            vulnerability_class: result.extra.metadata.vulnerability_class.clone(),
            impact: result.extra.metadata.impact.clone(),
            message: result.extra.message.clone(),
            path: result.path.clone(),
            cwe: result.extra.metadata.cwe.clone(),
            lines: result.extra.lines.clone(),
            vuln_lines,
        }
    }
}

/// One finding paired with every test case proven to exercise it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedResult {
    pub semgrep: SemgrepSummary,
    pub test_cases: Vec<TestCaseMatch>,
    /// Filled in downstream by the fix-suggestion pipeline; never set
    /// by the correlation engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_suggested_fix: Option<String>,
}

/// Final correlation report: summary header plus matched results in
/// semgrep input order.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationReport {
    pub summary: Summary,
    pub matched_results: Vec<MatchedResult>,
}

use std::collections::BTreeMap;

use chrono::Local;
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::coverage::CoverageReport;
use crate::error::Result;
use crate::matcher::{extract_test_cases, match_test_cases, TestCase};
use crate::report::types::{CorrelationReport, MatchedResult, SemgrepSummary, Summary};
use crate::semgrep::{SemgrepReport, SemgrepResult};

/// Options controlling a correlation run.
#[derive(Debug, Clone, Default)]
pub struct CorrelateOptions {
    /// Regex matched against `check_id` (substring search, not
    /// full-match); matching findings are skipped entirely. Empty means
    /// no exclusion.
    pub exclude_rule: String,
    /// Input paths recorded verbatim in the summary header
    pub semgrep_input_file: String,
    pub coverage_input_file: String,
}

/// Correlate semgrep findings with coverage contexts.
///
/// Findings are processed in semgrep input order. A finding survives into
/// the report only if its file appears in the coverage report and at
/// least one test case overlaps its vulnerable line range. The summary's
/// input count is the raw results count, unaffected by exclusion or
/// matching.
pub fn correlate(
    semgrep: &SemgrepReport,
    coverage: &CoverageReport,
    options: &CorrelateOptions,
) -> Result<CorrelationReport> {
    let uid = Uuid::new_v4().to_string();
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let number_input = semgrep.results.len();

    // Compiled before the finding loop so a bad pattern aborts with no
    // partial report
    let exclude = if options.exclude_rule.is_empty() {
        None
    } else {
        Some(Regex::new(&options.exclude_rule)?)
    };

    info!(vulnerabilities = number_input, "correlating findings with test coverage");
    if let Some(pattern) = &exclude {
        info!(pattern = %pattern.as_str(), "excluding findings whose check_id matches");
    }

    let candidates: Vec<&SemgrepResult> = semgrep
        .results
        .iter()
        .filter(|result| match &exclude {
            Some(re) => !re.is_match(&result.check_id),
            None => true,
        })
        .collect();

    // Extraction is pure per file; invert each referenced coverage file
    // once and let the matching loop share the result read-only. A file
    // entry without contexts is treated like an absent file: the
    // structure spot-check only vouches for the first entry.
    let mut test_cases_by_file: BTreeMap<&str, Vec<TestCase>> = BTreeMap::new();
    for result in &candidates {
        if test_cases_by_file.contains_key(result.path.as_str()) {
            continue;
        }
        if let Some(contexts) = coverage
            .files
            .get(&result.path)
            .and_then(|file| file.contexts.as_ref())
        {
            test_cases_by_file.insert(&result.path, extract_test_cases(contexts));
        }
    }

    // Workers only read the shared extraction map; the ordered collect
    // keeps semgrep input order
    let matched_results: Vec<MatchedResult> = candidates
        .par_iter()
        .filter_map(|result| {
            let Some(test_cases) = test_cases_by_file.get(result.path.as_str()) else {
                debug!(finding = %result, "file absent from coverage report, dropping");
                return None;
            };

            let vuln_lines = result.vulnerable_lines();
            let matches = match_test_cases(test_cases, &vuln_lines);
            if matches.is_empty() {
                debug!(finding = %result, "no test case overlaps, dropping");
                return None;
            }

            Some(MatchedResult {
                semgrep: SemgrepSummary::from_result(result, vuln_lines),
                test_cases: matches,
                llm_suggested_fix: None,
            })
        })
        .collect();

    let uncovered_files = candidates
        .iter()
        .filter(|result| !test_cases_by_file.contains_key(result.path.as_str()))
        .count();
    info!(
        matched = matched_results.len(),
        dropped_uncovered_file = uncovered_files,
        "correlation finished"
    );

    Ok(CorrelationReport {
        summary: Summary {
            semgrep_input_file: options.semgrep_input_file.clone(),
            coverage_input_file: options.coverage_input_file.clone(),
            uid,
            timestamp,
            number_vulnerabilities_input: number_input,
            number_vulnerabilities_matched: matched_results.len(),
        },
        matched_results,
    })
}

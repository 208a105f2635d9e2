use std::collections::BTreeSet;

use serde::Serialize;

use super::test_cases::TestCase;

/// A test case proven to execute part of a finding's line range.
#[derive(Debug, Clone, Serialize)]
pub struct TestCaseMatch {
    pub name: String,
    /// All lines the test executed in the file, exactly as extracted
    pub executed_lines: Vec<u64>,
    /// Intersection of `executed_lines` with the vulnerable range.
    /// Emitted ascending; callers must not rely on a particular order.
    pub matched_lines: Vec<u64>,
    /// |matched| / |vulnerable| × 100, exact, unrounded
    pub coverage_match_percentage: f64,
}

/// Intersect each test case's executed lines with a finding's vulnerable
/// line range.
///
/// One record is emitted per test case with a non-empty intersection, in
/// extraction order; no sorting by percentage or name happens here. A
/// test case with no overlap produces nothing, so every record's
/// percentage is in (0, 100].
pub fn match_test_cases(test_cases: &[TestCase], vulnerable_lines: &[u64]) -> Vec<TestCaseMatch> {
    let vulnerable: BTreeSet<u64> = vulnerable_lines.iter().copied().collect();

    test_cases
        .iter()
        .filter_map(|case| {
            let executed: BTreeSet<u64> = case.executed_lines.iter().copied().collect();
            let matched: Vec<u64> = executed.intersection(&vulnerable).copied().collect();

            if matched.is_empty() {
                return None;
            }

            let percentage = matched.len() as f64 / vulnerable.len() as f64 * 100.0;
            Some(TestCaseMatch {
                name: case.name.clone(),
                executed_lines: case.executed_lines.clone(),
                matched_lines: matched,
                coverage_match_percentage: percentage,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(name: &str, lines: &[u64]) -> TestCase {
        TestCase {
            name: name.to_string(),
            executed_lines: lines.to_vec(),
        }
    }

    #[test]
    fn test_full_overlap_is_100_percent() {
        let cases = vec![case("test_login_success", &[18, 19, 20, 21])];
        let matches = match_test_cases(&cases, &[20]);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "test_login_success");
        assert_eq!(matches[0].matched_lines, vec![20]);
        assert_eq!(matches[0].coverage_match_percentage, 100.0);
    }

    #[test]
    fn test_partial_overlap_is_exact_ratio() {
        let cases = vec![case("test_a", &[10])];
        let matches = match_test_cases(&cases, &[10, 11, 12]);

        assert_eq!(matches[0].matched_lines, vec![10]);
        assert_eq!(matches[0].coverage_match_percentage, 1.0 / 3.0 * 100.0);
    }

    #[test]
    fn test_no_overlap_emits_nothing() {
        let cases = vec![case("test_a", &[1, 2, 3])];
        assert!(match_test_cases(&cases, &[20, 21]).is_empty());
    }

    #[test]
    fn test_executed_lines_pass_through_unmodified() {
        let cases = vec![case("test_a", &[5, 20, 7])];
        let matches = match_test_cases(&cases, &[20]);
        assert_eq!(matches[0].executed_lines, vec![5, 20, 7]);
    }

    #[test]
    fn test_record_order_follows_extraction_order() {
        let cases = vec![
            case("test_b", &[20]),
            case("test_a", &[20, 21]),
            case("test_c", &[99]),
        ];
        let matches = match_test_cases(&cases, &[20, 21]);

        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["test_b", "test_a"]);
        assert_eq!(matches[0].coverage_match_percentage, 50.0);
        assert_eq!(matches[1].coverage_match_percentage, 100.0);
    }

    #[test]
    fn test_empty_vulnerable_range_matches_nothing() {
        let cases = vec![case("test_a", &[1, 2, 3])];
        assert!(match_test_cases(&cases, &[]).is_empty());
    }

    #[test]
    fn test_duplicate_executed_lines_count_once() {
        // Extraction never produces duplicates, but the matcher must not
        // double-count if handed them
        let cases = vec![case("test_a", &[20, 20, 21])];
        let matches = match_test_cases(&cases, &[20, 21]);
        assert_eq!(matches[0].matched_lines, vec![20, 21]);
        assert_eq!(matches[0].coverage_match_percentage, 100.0);
    }
}

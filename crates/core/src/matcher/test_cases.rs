use crate::coverage::ContextMap;

/// A test context and the lines it executed in one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    /// Line numbers in the order they were encountered (ascending, since
    /// the context map is line-ordered). Not deduplicated by this step;
    /// each source line contributes at most one entry by construction.
    pub executed_lines: Vec<u64>,
}

/// Invert a file's line → test-contexts mapping into per-test
/// executed-line lists.
///
/// Lines are walked in ascending order. Test cases appear in the output
/// in first-seen order; an explicit `Vec` keeps that order part of the
/// contract instead of leaning on map iteration. Empty context names
/// mark lines executed outside any tracked test and are skipped.
pub fn extract_test_cases(contexts: &ContextMap) -> Vec<TestCase> {
    let mut cases: Vec<TestCase> = Vec::new();

    for (&line, tests) in contexts {
        for test in tests {
            if test.is_empty() {
                continue;
            }
            match cases.iter_mut().find(|case| case.name == *test) {
                Some(case) => case.executed_lines.push(line),
                None => cases.push(TestCase {
                    name: test.clone(),
                    executed_lines: vec![line],
                }),
            }
        }
    }

    cases
}

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Line number → names of the test contexts that executed it.
/// An empty name marks a line that ran outside any tracked test.
pub type ContextMap = BTreeMap<u64, Vec<String>>;

/// A coverage.py JSON report. `files` maps source path to per-file data.
/// A `BTreeMap` keeps iteration deterministic, which the structure
/// spot-check relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverageReport {
    pub files: BTreeMap<String, FileCoverage>,
}

/// Per-file coverage entry. `contexts` is only present when the report
/// was generated with dynamic context tracking (`--show-contexts`).
#[derive(Debug, Clone, Deserialize)]
pub struct FileCoverage {
    #[serde(default, deserialize_with = "deserialize_contexts")]
    pub contexts: Option<ContextMap>,
}

/// coverage.py serializes line numbers as JSON object keys, which are
/// strings; accept integers too in case the report was post-processed.
fn deserialize_contexts<'de, D>(deserializer: D) -> Result<Option<ContextMap>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ContextMapVisitor;

    impl<'de> Visitor<'de> for ContextMapVisitor {
        type Value = ContextMap;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from line number to test context names")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut lines = ContextMap::new();
            while let Some((key, tests)) = map.next_entry::<LineKey, Vec<String>>()? {
                lines.insert(key.0, tests);
            }
            Ok(lines)
        }
    }

    deserializer.deserialize_map(ContextMapVisitor).map(Some)
}

struct LineKey(u64);

impl<'de> Deserialize<'de> for LineKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = u64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a line number as an integer or string")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
                Ok(value)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
                u64::try_from(value)
                    .map_err(|_| E::custom(format!("negative line number: {value}")))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
                value
                    .parse()
                    .map_err(|_| E::custom(format!("invalid line number: {value:?}")))
            }
        }

        deserializer.deserialize_any(KeyVisitor).map(LineKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_line_keys() {
        let json = r#"{
            "files": {
                "src/dummyapp.py": {
                    "executed_lines": [1, 2, 24],
                    "contexts": {
                        "24": ["tests/login_test.py::test_login_success|run"],
                        "25": []
                    }
                }
            }
        }"#;
        let report: CoverageReport = serde_json::from_str(json).unwrap();
        let contexts = report.files["src/dummyapp.py"].contexts.as_ref().unwrap();
        assert_eq!(
            contexts[&24],
            vec!["tests/login_test.py::test_login_success|run".to_string()]
        );
        assert!(contexts[&25].is_empty());
    }

    #[test]
    fn test_integer_line_keys() {
        // JSON object keys are strings, but a post-processed report may
        // arrive with numeric keys via a non-strict producer
        let json = r#"{"files": {"app.py": {"contexts": {"7": ["test_a"], "10": ["test_b"]}}}}"#;
        let report: CoverageReport = serde_json::from_str(json).unwrap();
        let contexts = report.files["app.py"].contexts.as_ref().unwrap();
        assert_eq!(contexts.keys().copied().collect::<Vec<_>>(), vec![7, 10]);
    }

    #[test]
    fn test_numeric_key_order() {
        // Lexicographic order would put "10" before "2"; the parsed map
        // must order lines numerically
        let json = r#"{"files": {"app.py": {"contexts": {"10": ["t"], "2": ["t"]}}}}"#;
        let report: CoverageReport = serde_json::from_str(json).unwrap();
        let contexts = report.files["app.py"].contexts.as_ref().unwrap();
        assert_eq!(contexts.keys().copied().collect::<Vec<_>>(), vec![2, 10]);
    }

    #[test]
    fn test_missing_contexts_is_none() {
        let json = r#"{"files": {"app.py": {"executed_lines": [1, 2]}}}"#;
        let report: CoverageReport = serde_json::from_str(json).unwrap();
        assert!(report.files["app.py"].contexts.is_none());
    }

    #[test]
    fn test_invalid_line_key_is_rejected() {
        let json = r#"{"files": {"app.py": {"contexts": {"not-a-line": ["t"]}}}}"#;
        assert!(serde_json::from_str::<CoverageReport>(json).is_err());
    }
}

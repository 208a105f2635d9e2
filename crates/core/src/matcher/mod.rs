pub mod line_match;
pub mod test_cases;

pub use line_match::{match_test_cases, TestCaseMatch};
pub use test_cases::{extract_test_cases, TestCase};

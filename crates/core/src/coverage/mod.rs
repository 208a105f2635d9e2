pub mod types;
pub mod validate;

pub use types::{ContextMap, CoverageReport, FileCoverage};
pub use validate::validate_structure;

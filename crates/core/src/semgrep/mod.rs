pub mod display;
pub mod types;

pub use types::{LinePos, SemgrepExtra, SemgrepMetadata, SemgrepReport, SemgrepResult};

use std::fmt;

use super::types::SemgrepResult;

impl fmt::Display for SemgrepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.check_id, self.path, self.start.line)?;
        if self.end.line > self.start.line {
            write!(f, "-{}", self.end.line)?;
        }
        Ok(())
    }
}

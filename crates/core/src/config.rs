use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Project-level configuration loaded from `.vulnreach.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub correlate: CorrelateConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorrelateConfig {
    /// Regex matched against semgrep check_id; matching findings are
    /// skipped. Empty means no exclusion.
    pub exclude_rule: String,
    /// Default path for the correlation report
    pub output: String,
}

impl Default for CorrelateConfig {
    fn default() -> Self {
        Self {
            exclude_rule: String::new(),
            output: "vulnreach_results.json".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file path. Returns default config if the
    /// file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::data_format(path, format!("invalid TOML: {e}")))?;
        Ok(config)
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# vulnreach configuration

[correlate]
# Regex matched against semgrep check_id; matching findings are skipped.
exclude_rule = ""

# Default path for the correlation report.
output = "vulnreach_results.json"
"#
    }
}

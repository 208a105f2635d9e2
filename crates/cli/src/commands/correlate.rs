use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vulnreach::config::Config;
use vulnreach::coverage;
use vulnreach::loader;
use vulnreach::report::{correlate, CorrelateOptions};

use crate::output;
use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn run(
    semgrep_path: &Path,
    coverage_path: &Path,
    output_path: Option<PathBuf>,
    exclude_rule: Option<String>,
    format: OutputFormat,
    config_path: Option<PathBuf>,
    quiet: bool,
    no_color: bool,
) -> Result<()> {
    // 1. Resolve config; explicit flags win over file values
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(".vulnreach.toml"));
    let config = Config::load(&config_path)?;
    let exclude_rule = exclude_rule.unwrap_or(config.correlate.exclude_rule);
    let output_path = output_path.unwrap_or_else(|| PathBuf::from(&config.correlate.output));

    // 2. Load both input reports
    let semgrep = loader::load_semgrep(semgrep_path)?;
    let cov = loader::load_coverage(coverage_path)?;

    // 3. Fail fast if the coverage report lacks per-test contexts
    coverage::validate_structure(&cov)?;

    // 4. Correlate
    let options = CorrelateOptions {
        exclude_rule,
        semgrep_input_file: semgrep_path.display().to_string(),
        coverage_input_file: coverage_path.display().to_string(),
    };
    let report = correlate(&semgrep, &cov, &options)?;

    // 5. Save the report
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(&output_path, &json)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    tracing::info!(path = %output_path.display(), "correlation report saved");

    // 6. Terminal view
    match format {
        OutputFormat::Json => output::json::print(&report)?,
        OutputFormat::Text => output::text::print(&report, quiet, no_color)?,
    }

    Ok(())
}

use anyhow::Result;
use vulnreach::report::CorrelationReport;

pub fn print(report: &CorrelationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

use anyhow::Result;
use colored::Colorize;
use vulnreach::report::CorrelationReport;

pub fn print(report: &CorrelationReport, quiet: bool, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    if !quiet {
        println!();
        println!("{}", "  vulnreach - findings vs. test coverage".bold());
        println!(
            "  Findings in: {}   matched by tests: {}",
            report.summary.number_vulnerabilities_input,
            report.summary.number_vulnerabilities_matched
        );
        println!();
    }

    if report.matched_results.is_empty() {
        if !quiet {
            println!(
                "  {} No findings are exercised by the test suite.",
                "✓".green().bold()
            );
            println!();
        }
        return Ok(());
    }

    for result in &report.matched_results {
        let impact = result.semgrep.impact.to_uppercase();
        let impact_label = match impact.as_str() {
            "HIGH" => impact.red().bold(),
            "MEDIUM" => impact.yellow().bold(),
            "LOW" => impact.blue(),
            _ => impact.dimmed(),
        };

        println!("  [{}] {}", impact_label, result.semgrep.check_id);

        let first = result.semgrep.vuln_lines.first().copied().unwrap_or_default();
        let last = result.semgrep.vuln_lines.last().copied().unwrap_or_default();
        if first == last {
            println!("    {} {}:{}", "-->".dimmed(), result.semgrep.path, first);
        } else {
            println!(
                "    {} {}:{}-{}",
                "-->".dimmed(),
                result.semgrep.path,
                first,
                last
            );
        }

        for case in &result.test_cases {
            println!(
                "    {} {} ({:.1}% of vulnerable lines)",
                "|".dimmed(),
                case.name,
                case.coverage_match_percentage
            );
        }
        println!();
    }

    if !quiet {
        println!(
            "  Report written for {} matched finding(s).",
            report.matched_results.len()
        );
        println!();
    }

    Ok(())
}

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vulnreach")]
#[command(about = "Correlates semgrep findings with test code coverage")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correlate a semgrep report with a coverage report
    Correlate {
        /// Path to the semgrep JSON report
        #[arg(short, long)]
        semgrep: PathBuf,

        /// Path to the coverage JSON report (generated with --show-contexts)
        #[arg(short, long)]
        coverage: PathBuf,

        /// Path to save the correlation report (default from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exclude findings whose check_id matches this regex
        #[arg(short, long)]
        exclude_rule: Option<String>,

        /// Terminal output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file (default: .vulnreach.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Suppress banner and summary
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Generate a default .vulnreach.toml config file
    Init,
}

#[derive(ValueEnum, Clone)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Correlate {
            semgrep,
            coverage,
            output,
            exclude_rule,
            format,
            config,
            quiet,
            no_color,
        } => {
            init_tracing(quiet);
            commands::correlate::run(
                &semgrep,
                &coverage,
                output,
                exclude_rule,
                format,
                config,
                quiet,
                no_color,
            )
        }
        Commands::Init => commands::init::run(),
    }
}

/// Log to stderr so stdout stays clean for the JSON output format.
/// RUST_LOG overrides the default level; --quiet drops to errors only.
fn init_tracing(quiet: bool) {
    let default = if quiet { "error" } else { "vulnreach=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

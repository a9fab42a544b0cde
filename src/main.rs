//! cvss-scorer command-line entry point.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use cvss_scorer::{
    cli,
    config::{self, AppConfig, ConfigPreset},
    pipeline::{exit_codes, OutputTarget},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring:",
        "\n  CVSS v3.1 base, temporal and environmental metric groups",
        "\n\nOutput Formats:",
        "\n  summary, json, csv, markdown"
    )
}

#[derive(Parser)]
#[command(name = "cvss-scorer")]
#[command(version, long_version = build_long_version())]
#[command(about = "Compute CVSS v3.1 scores from a vector string", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Scored successfully
    1  Overall score at or above --fail-above
    2  Invalid vector (MalformedMetric or UnknownMetricValue)
    3  Error occurred

EXAMPLES:
    # Print a score summary to the terminal
    cvss-scorer AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H -

    # Write a JSON report (format inferred from the extension)
    cvss-scorer 'CVSS:3.1/AV:N/AC:H/PR:N/UI:N/S:U/C:L/I:H/A:N/E:P' scores.json

    # CI gate: fail on High or Critical
    cvss-scorer \"$VECTOR\" - --preset gate")]
struct Cli {
    /// CVSS v3.1 vector, e.g. AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H
    #[arg(required_unless_present_any = ["completions", "config_schema", "init_config"])]
    vector: Option<String>,

    /// Output path (`-` for stdout)
    #[arg(required_unless_present_any = ["completions", "config_schema", "init_config"])]
    output: Option<PathBuf>,

    /// Output format (auto infers from the output extension, summary otherwise)
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Exit with code 1 when the overall score is at or above this value
    #[arg(long, value_name = "SCORE")]
    fail_above: Option<f64>,

    /// Omit per-metric letters and coefficients from the report
    #[arg(long)]
    no_metrics: bool,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Configuration preset (default, ci-cd, gate)
    #[arg(long, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Print the JSON Schema of the config file format and exit
    #[arg(long)]
    config_schema: bool,

    /// Write a commented .cvss-scorer.yaml to the current directory and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_preset(name: &str) -> Result<ConfigPreset, String> {
    name.parse()
}

impl Cli {
    /// Settings given on the command line, as a config to merge over the file.
    fn overrides(&self) -> AppConfig {
        let mut builder = AppConfig::builder()
            .output_format(self.format.unwrap_or_default())
            .no_color(self.no_color)
            .include_metrics(!self.no_metrics)
            .quiet(self.quiet);
        if let Some(title) = &self.title {
            builder = builder.title(title.clone());
        }
        if let Some(threshold) = self.fail_above {
            builder = builder.fail_above(threshold);
        }
        builder.build()
    }

    /// File config, then preset, then command-line flags.
    fn effective_config(&self) -> AppConfig {
        let (mut config, loaded_from) = config::load_or_default(self.config.as_deref());
        if let Some(path) = loaded_from {
            tracing::debug!("Using config file {}", path.display());
        }
        if let Some(preset) = self.preset {
            config.merge(&AppConfig::from_preset(preset));
        }
        config.merge(&self.overrides());
        config
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let (filter, filter_handle) =
        reload::Layer::new(env_filter(log_level(cli.verbose, cli.quiet)));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // `quiet` may also come from the config file or a preset
    let app_config = cli.effective_config();
    let level = log_level(cli.verbose, app_config.behavior.quiet);
    if let Err(err) = filter_handle.reload(env_filter(level)) {
        tracing::debug!("Failed to update log level: {err}");
    }

    match run(&cli, &app_config) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("{}", cli::describe_error(&err));
            std::process::exit(cli::exit_code_for(&err));
        }
    }
}

/// Default log level; `-v` wins over quiet.
const fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

/// `RUST_LOG` overrides the default level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()))
}

fn run(cli: &Cli, app_config: &AppConfig) -> Result<i32> {
    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "cvss-scorer", &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    if cli.config_schema {
        println!("{}", config::generate_json_schema());
        return Ok(exit_codes::SUCCESS);
    }

    if cli.init_config {
        let target = std::env::current_dir()
            .context("cannot determine current directory")?
            .join(".cvss-scorer.yaml");
        if target.exists() {
            anyhow::bail!(
                "{} already exists. Remove it first to re-initialize.",
                target.display()
            );
        }
        std::fs::write(&target, config::generate_full_example_config())
            .with_context(|| format!("failed to write {}", target.display()))?;
        eprintln!("Created {}", target.display());
        return Ok(exit_codes::SUCCESS);
    }

    let vector = cli.vector.as_deref().context("missing vector argument")?;
    let output = OutputTarget::from_option(cli.output.clone());

    cli::run_score(vector, &output, app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_precedence() {
        assert_eq!(log_level(false, false), "info");
        assert_eq!(log_level(false, true), "warn");
        assert_eq!(log_level(true, true), "debug");
    }

    #[test]
    fn test_preset_quiet_lowers_log_level() {
        let cli = Cli::parse_from([
            "cvss-scorer",
            "AV:N",
            "-",
            "--preset",
            "ci-cd",
            "--config",
            "/nonexistent/cvss-scorer.yaml",
        ]);
        assert!(!cli.quiet);

        let config = cli.effective_config();
        assert!(config.behavior.quiet);
        assert_eq!(log_level(cli.verbose, config.behavior.quiet), "warn");
    }
}

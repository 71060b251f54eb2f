use alarmrank_core::{AppError, AppResult};
use clap::Parser;
use std::path::PathBuf;
use std::process;

mod input;
mod logging;
mod prioritize;

#[derive(Parser)]
#[command(name = "alarmrank")]
#[command(about = "Score and rank network alarms so operators see what to act on first.")]
struct Cli {
    /// JSON array of alarm records.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Scoring policy (JSON or YAML). Built-in weights are used when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "FORMAT", default_value = "table")]
    format: String,

    /// Keep only the N highest-ranked alarms.
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Reference instant (RFC 3339) for recency decay; defaults to the newest lastSeen.
    #[arg(long, value_name = "TIMESTAMP")]
    as_of: Option<String>,

    /// Write the report to PATH instead of stdout.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    #[arg(long)]
    overwrite: bool,

    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{}", err.message());
        process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> AppResult<()> {
    validate_log_level(&cli.log_level)?;
    validate_log_format(&cli.log_format)?;
    logging::init(&cli.log_level, &cli.log_format);

    prioritize::prioritize_command(prioritize::PrioritizeArgs {
        input: cli.input,
        config: cli.config,
        format: cli.format,
        top: cli.top,
        as_of: cli.as_of,
        output: cli.output,
        overwrite: cli.overwrite,
    })
}

fn validate_log_level(value: &str) -> AppResult<()> {
    match value {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
        _ => Err(AppError::usage(format!(
            "invalid --log-level '{value}'; expected error|warn|info|debug|trace"
        ))),
    }
}

fn validate_log_format(value: &str) -> AppResult<()> {
    match value {
        "text" | "json" => Ok(()),
        _ => Err(AppError::usage(format!(
            "invalid --log-format '{value}'; expected text|json"
        ))),
    }
}

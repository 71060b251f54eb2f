use crate::input::load_alarms;
use alarmrank_core::json::canonical_hash;
use alarmrank_core::{AppError, AppResult};
use alarmrank_engine::{prioritize, RankOptions, ScoringConfig};
use alarmrank_report::{render, OutputFormat};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct PrioritizeArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: String,
    pub top: Option<usize>,
    pub as_of: Option<String>,
    pub output: Option<PathBuf>,
    pub overwrite: bool,
}

pub fn prioritize_command(args: PrioritizeArgs) -> AppResult<()> {
    let format = OutputFormat::parse(&args.format)?;
    let reference_time = args.as_of.as_deref().map(parse_as_of).transpose()?;
    if let Some(out_path) = &args.output {
        if out_path.is_dir() {
            return Err(AppError::usage("output path is a directory"));
        }
        if out_path.exists() && !args.overwrite {
            return Err(AppError::usage(format!(
                "{} already exists; use --overwrite to replace",
                out_path.display()
            )));
        }
    }

    let config = match &args.config {
        Some(path) => {
            let config = ScoringConfig::load(path)?;
            info!(path = %path.display(), config_hash = %config.config_hash()?, "scoring config loaded");
            config
        }
        None => {
            let config = ScoringConfig::builtin();
            info!(config_hash = %config.config_hash()?, "using built-in scoring config");
            config
        }
    };

    let records = load_alarms(&args.input)?;
    info!(alarms = records.len(), input = %args.input.display(), "alarms loaded");

    let options = RankOptions {
        top: args.top,
        reference_time,
    };
    let results = prioritize(&records, &config, options)?;
    debug!(
        results = results.len(),
        determinism_hash = %canonical_hash(&results)?,
        "alarms ranked"
    );

    let rendered = render(format, &results)?;
    match &args.output {
        Some(out_path) => {
            std::fs::write(out_path, rendered).map_err(|e| {
                AppError::internal(format!("failed to write {}: {e}", out_path.display()))
            })?;
            info!(path = %out_path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| AppError::internal(format!("failed to write report: {e}")))?;
        }
    }
    Ok(())
}

fn parse_as_of(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| AppError::usage(format!("invalid --as-of '{value}': {e}")))
}

use crate::format::OutputFormat;
use alarmrank_core::{AppError, AppResult};
use alarmrank_engine::ScoreResult;

const RANK_WIDTH: usize = 4;
const SCORE_WIDTH: usize = 8;
const ID_WIDTH: usize = 14;
const NODE_WIDTH: usize = 20;
const SEV_WIDTH: usize = 4;

pub fn render(format: OutputFormat, results: &[ScoreResult]) -> AppResult<String> {
    match format {
        OutputFormat::Json => render_json(results),
        OutputFormat::Table => Ok(render_table(results)),
    }
}

pub fn render_json(results: &[ScoreResult]) -> AppResult<String> {
    let mut out = serde_json::to_string_pretty(results)
        .map_err(|e| AppError::internal(format!("result json encode error: {e}")))?;
    out.push('\n');
    Ok(out)
}

/// Fixed-width table. Values wider than their column push the rest of the
/// row right rather than being cut.
pub fn render_table(results: &[ScoreResult]) -> String {
    let mut out = String::new();
    out.push_str(&row("RANK", "SCORE", "ID", "NODE", "SEV", "REASON"));
    for result in results {
        out.push_str(&row(
            &result.rank.to_string(),
            &format!("{:.2}", result.score),
            &result.id,
            &result.node_id,
            result.severity.abbrev(),
            &result.reason,
        ));
    }
    out
}

fn row(rank: &str, score: &str, id: &str, node: &str, sev: &str, reason: &str) -> String {
    let line = format!(
        "{:<rw$}  {:>sw$}  {:<iw$}  {:<nw$}  {:<vw$}  {}",
        rank,
        score,
        id,
        node,
        sev,
        reason,
        rw = RANK_WIDTH,
        sw = SCORE_WIDTH,
        iw = ID_WIDTH,
        nw = NODE_WIDTH,
        vw = SEV_WIDTH,
    );
    format!("{}\n", line.trim_end())
}

use crate::config::ScoringConfig;
use crate::model::{Alarm, AlarmRecord, ScoreResult};
use crate::score::{score_alarm_at, Scored};
use alarmrank_core::AppResult;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions {
    /// Number of results to keep; `None` keeps everything.
    pub top: Option<usize>,
    /// Instant recency decay is measured against. Defaults to the latest
    /// `lastSeen` in the batch.
    pub reference_time: Option<DateTime<Utc>>,
}

/// Resolves every record, scores and ranks the batch. Any record with an
/// unrecognized severity fails the whole batch before scoring starts.
pub fn prioritize(
    records: &[AlarmRecord],
    config: &ScoringConfig,
    options: RankOptions,
) -> AppResult<Vec<ScoreResult>> {
    let alarms = records
        .iter()
        .map(Alarm::from_record)
        .collect::<AppResult<Vec<_>>>()?;
    Ok(rank_alarms(&alarms, config, options))
}

pub fn rank_alarms(
    alarms: &[Alarm],
    config: &ScoringConfig,
    options: RankOptions,
) -> Vec<ScoreResult> {
    let reference = options
        .reference_time
        .or_else(|| alarms.iter().map(|alarm| alarm.last_seen).max());

    let mut scored: Vec<(&Alarm, Scored)> = alarms
        .par_iter()
        .map(|alarm| (alarm, score_alarm_at(alarm, config, reference)))
        .collect();

    scored.sort_by(|a, b| compare_scored(a, b, config));
    if let Some(top) = options.top {
        scored.truncate(top);
    }

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (alarm, scored))| ScoreResult {
            id: alarm.id.clone(),
            node_id: alarm.node_id.clone(),
            severity: alarm.severity,
            score: scored.score,
            rank: (idx + 1) as u32,
            reason: scored.reason,
        })
        .collect()
}

fn compare_scored(a: &(&Alarm, Scored), b: &(&Alarm, Scored), config: &ScoringConfig) -> Ordering {
    let (alarm_a, scored_a) = a;
    let (alarm_b, scored_b) = b;
    scored_b
        .score
        .total_cmp(&scored_a.score)
        .then_with(|| {
            config
                .severity_rank(alarm_a.severity)
                .cmp(&config.severity_rank(alarm_b.severity))
        })
        .then_with(|| alarm_b.last_seen.cmp(&alarm_a.last_seen))
        .then_with(|| alarm_a.id.cmp(&alarm_b.id))
}

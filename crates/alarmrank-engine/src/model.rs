use crate::severity::Severity;
use alarmrank_core::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alarm as it arrives on the wire. Severity stays a plain string until
/// [`Alarm::from_record`] resolves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmRecord {
    pub id: String,
    pub node_id: String,
    pub severity: String,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    #[serde(default)]
    pub occurrences_per_hour: f64,
    #[serde(default)]
    pub affected_links: u32,
    #[serde(default)]
    pub traffic_impact_pct: f64,
    #[serde(default)]
    pub service_affecting: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub id: String,
    pub node_id: String,
    pub severity: Severity,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub occurrences_per_hour: f64,
    pub affected_links: u32,
    pub traffic_impact_pct: f64,
    pub service_affecting: bool,
    pub description: String,
}

impl Alarm {
    pub fn from_record(record: &AlarmRecord) -> AppResult<Self> {
        let severity = Severity::parse(&record.severity)
            .ok_or_else(|| AppError::unknown_severity(&record.severity, &record.id))?;
        Ok(Self {
            id: record.id.clone(),
            node_id: record.node_id.clone(),
            severity,
            first_seen: record.first_seen,
            last_seen: record.last_seen,
            occurrences_per_hour: record.occurrences_per_hour,
            affected_links: record.affected_links,
            traffic_impact_pct: record.traffic_impact_pct,
            service_affecting: record.service_affecting,
            description: record.description.clone(),
        })
    }

    /// Hours between first and last sighting; an inverted pair counts as zero.
    pub fn duration_hours(&self) -> f64 {
        hours_between(self.first_seen, self.last_seen)
    }

    /// Hours since the last sighting, measured against `reference`.
    pub fn age_hours(&self, reference: DateTime<Utc>) -> f64 {
        hours_between(self.last_seen, reference)
    }
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = (to - from).num_milliseconds().max(0);
    millis as f64 / 3_600_000.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub id: String,
    pub node_id: String,
    pub severity: Severity,
    pub score: f64,
    pub rank: u32,
    pub reason: String,
}

use crate::config::ScoringConfig;
use crate::model::Alarm;
use crate::reason::build_reason;
use chrono::{DateTime, Utc};

/// A single term of the score formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Severity,
    ServiceAffecting,
    TrafficImpact,
    AffectedLinks,
    Occurrence,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub factor: Factor,
    pub value: f64,
}

/// Per-term values for one alarm, in reason tie-break order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub severity: f64,
    pub service_affecting: f64,
    pub traffic_impact: f64,
    pub affected_links: f64,
    pub occurrence: f64,
    pub duration: f64,
}

impl Breakdown {
    pub fn contributions(&self) -> [Contribution; 6] {
        [
            Contribution {
                factor: Factor::Severity,
                value: self.severity,
            },
            Contribution {
                factor: Factor::ServiceAffecting,
                value: self.service_affecting,
            },
            Contribution {
                factor: Factor::TrafficImpact,
                value: self.traffic_impact,
            },
            Contribution {
                factor: Factor::AffectedLinks,
                value: self.affected_links,
            },
            Contribution {
                factor: Factor::Occurrence,
                value: self.occurrence,
            },
            Contribution {
                factor: Factor::Duration,
                value: self.duration,
            },
        ]
    }

    /// Sum in formula order so the result does not depend on reason ordering.
    pub fn total(&self) -> f64 {
        self.severity
            + self.occurrence
            + self.affected_links
            + self.traffic_impact
            + self.duration
            + self.service_affecting
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub reason: String,
    pub breakdown: Breakdown,
}

pub fn score_alarm(alarm: &Alarm, config: &ScoringConfig) -> Scored {
    score_alarm_at(alarm, config, None)
}

/// Scores `alarm`. `reference` is the instant recency decay is measured
/// against; without one the alarm is treated as current.
pub fn score_alarm_at(
    alarm: &Alarm,
    config: &ScoringConfig,
    reference: Option<DateTime<Utc>>,
) -> Scored {
    let breakdown = breakdown(alarm, config, reference);
    Scored {
        score: breakdown.total(),
        reason: build_reason(alarm, &breakdown),
        breakdown,
    }
}

pub fn clamp_impact_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn breakdown(alarm: &Alarm, config: &ScoringConfig, reference: Option<DateTime<Utc>>) -> Breakdown {
    let recency = recency_factor(alarm, config, reference);

    let occurrences = alarm.occurrences_per_hour.max(0.0).min(config.occurrence_cap());
    let links = f64::from(alarm.affected_links).min(config.link_cap());
    let impact = clamp_impact_pct(alarm.traffic_impact_pct);
    let duration = alarm.duration_hours().min(config.duration_cap_hours());

    Breakdown {
        severity: config.severity_weight(alarm.severity),
        service_affecting: if alarm.service_affecting {
            config.service_affecting_bonus()
        } else {
            0.0
        },
        traffic_impact: recency * config.impact_weight() * impact,
        affected_links: recency * config.link_weight() * links,
        occurrence: recency * config.occurrence_weight() * occurrences,
        duration: recency * config.duration_weight() * duration,
    }
}

fn recency_factor(alarm: &Alarm, config: &ScoringConfig, reference: Option<DateTime<Utc>>) -> f64 {
    match (config.recency_half_life_hours(), reference) {
        (Some(half_life), Some(reference)) => 0.5f64.powf(alarm.age_hours(reference) / half_life),
        _ => 1.0,
    }
}

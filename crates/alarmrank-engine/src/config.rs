use crate::severity::Severity;
use alarmrank_core::json::canonical_hash;
use alarmrank_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_OCCURRENCE_CAP: f64 = 20.0;
pub const DEFAULT_LINK_CAP: f64 = 10.0;
pub const DEFAULT_DURATION_CAP_HOURS: f64 = 24.0;

/// Scoring parameters as written by an operator. Every field is optional here;
/// [`ScoringConfig::from_document`] decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringDocument {
    pub severity_weights: Option<BTreeMap<String, f64>>,
    pub occurrence_weight: Option<f64>,
    pub link_weight: Option<f64>,
    pub impact_weight: Option<f64>,
    pub service_affecting_bonus: Option<f64>,
    pub occurrence_cap: Option<f64>,
    pub link_cap: Option<f64>,
    pub severity_ranks: Option<BTreeMap<String, i64>>,
    pub duration_weight: Option<f64>,
    pub duration_cap_hours: Option<f64>,
    pub recency_half_life_hours: Option<f64>,
}

impl ScoringDocument {
    /// The built-in policy used when no config file is given.
    pub fn builtin() -> Self {
        let weights = [
            ("Critical", 100.0),
            ("Major", 40.0),
            ("Minor", 10.0),
            ("Warning", 5.0),
            ("Info", 1.0),
        ];
        Self {
            severity_weights: Some(
                weights
                    .iter()
                    .map(|(name, weight)| (name.to_string(), *weight))
                    .collect(),
            ),
            occurrence_weight: Some(0.5),
            link_weight: Some(1.0),
            impact_weight: Some(0.2),
            service_affecting_bonus: Some(10.0),
            occurrence_cap: None,
            link_cap: None,
            severity_ranks: None,
            duration_weight: None,
            duration_cap_hours: None,
            recency_half_life_hours: None,
        }
    }
}

/// One value per severity class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeverityTable<T> {
    critical: T,
    major: T,
    minor: T,
    warning: T,
    info: T,
}

impl<T: Copy> SeverityTable<T> {
    fn from_fn(mut f: impl FnMut(Severity) -> T) -> Self {
        Self {
            critical: f(Severity::Critical),
            major: f(Severity::Major),
            minor: f(Severity::Minor),
            warning: f(Severity::Warning),
            info: f(Severity::Info),
        }
    }

    pub fn get(&self, severity: Severity) -> T {
        match severity {
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Minor => self.minor,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

/// Validated, read-only scoring policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    severity_weights: SeverityTable<f64>,
    severity_ranks: SeverityTable<i64>,
    occurrence_weight: f64,
    link_weight: f64,
    impact_weight: f64,
    service_affecting_bonus: f64,
    occurrence_cap: f64,
    link_cap: f64,
    duration_weight: f64,
    duration_cap_hours: f64,
    recency_half_life_hours: Option<f64>,
}

impl ScoringConfig {
    pub fn builtin() -> Self {
        Self {
            severity_weights: SeverityTable {
                critical: 100.0,
                major: 40.0,
                minor: 10.0,
                warning: 5.0,
                info: 1.0,
            },
            severity_ranks: SeverityTable::from_fn(Severity::default_tier),
            occurrence_weight: 0.5,
            link_weight: 1.0,
            impact_weight: 0.2,
            service_affecting_bonus: 10.0,
            occurrence_cap: DEFAULT_OCCURRENCE_CAP,
            link_cap: DEFAULT_LINK_CAP,
            duration_weight: 0.0,
            duration_cap_hours: DEFAULT_DURATION_CAP_HOURS,
            recency_half_life_hours: None,
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("failed to read config {}: {e}", path.display()))
        })?;
        let document: ScoringDocument = serde_yaml::from_str(&content).map_err(|e| {
            AppError::config(format!("failed to parse config {}: {e}", path.display()))
        })?;
        Self::from_document(document)
    }

    pub fn from_document(document: ScoringDocument) -> AppResult<Self> {
        let raw_weights = document
            .severity_weights
            .ok_or_else(|| AppError::config("missing severityWeights"))?;
        let weights = severity_map("severityWeights", &raw_weights)?;
        for (severity, weight) in &weights {
            non_negative(&format!("severityWeights.{severity}"), *weight)?;
        }
        for severity in Severity::ALL {
            if !weights.contains_key(&severity) {
                return Err(AppError::config(format!(
                    "missing severityWeights.{severity}"
                )));
            }
        }

        let ranks = match &document.severity_ranks {
            Some(raw) => severity_map("severityRanks", raw)?,
            None => BTreeMap::new(),
        };

        let recency_half_life_hours = match document.recency_half_life_hours {
            Some(value) if value.is_finite() && value > 0.0 => Some(value),
            Some(value) => {
                return Err(AppError::config(format!(
                    "recencyHalfLifeHours must be > 0, got {value}"
                )))
            }
            None => None,
        };

        Ok(Self {
            severity_weights: SeverityTable::from_fn(|s| weights.get(&s).copied().unwrap_or(0.0)),
            severity_ranks: SeverityTable::from_fn(|s| {
                ranks.get(&s).copied().unwrap_or_else(|| s.default_tier())
            }),
            occurrence_weight: required("occurrenceWeight", document.occurrence_weight)?,
            link_weight: required("linkWeight", document.link_weight)?,
            impact_weight: required("impactWeight", document.impact_weight)?,
            service_affecting_bonus: required(
                "serviceAffectingBonus",
                document.service_affecting_bonus,
            )?,
            occurrence_cap: optional(
                "occurrenceCap",
                document.occurrence_cap,
                DEFAULT_OCCURRENCE_CAP,
            )?,
            link_cap: optional("linkCap", document.link_cap, DEFAULT_LINK_CAP)?,
            duration_weight: optional("durationWeight", document.duration_weight, 0.0)?,
            duration_cap_hours: optional(
                "durationCapHours",
                document.duration_cap_hours,
                DEFAULT_DURATION_CAP_HOURS,
            )?,
            recency_half_life_hours,
        })
    }

    pub fn config_hash(&self) -> AppResult<String> {
        canonical_hash(self)
    }

    pub fn severity_weight(&self, severity: Severity) -> f64 {
        self.severity_weights.get(severity)
    }

    pub fn severity_rank(&self, severity: Severity) -> i64 {
        self.severity_ranks.get(severity)
    }

    pub fn occurrence_weight(&self) -> f64 {
        self.occurrence_weight
    }

    pub fn link_weight(&self) -> f64 {
        self.link_weight
    }

    pub fn impact_weight(&self) -> f64 {
        self.impact_weight
    }

    pub fn service_affecting_bonus(&self) -> f64 {
        self.service_affecting_bonus
    }

    pub fn occurrence_cap(&self) -> f64 {
        self.occurrence_cap
    }

    pub fn link_cap(&self) -> f64 {
        self.link_cap
    }

    pub fn duration_weight(&self) -> f64 {
        self.duration_weight
    }

    pub fn duration_cap_hours(&self) -> f64 {
        self.duration_cap_hours
    }

    pub fn recency_half_life_hours(&self) -> Option<f64> {
        self.recency_half_life_hours
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

fn severity_map<T: Copy>(
    field: &str,
    raw: &BTreeMap<String, T>,
) -> AppResult<BTreeMap<Severity, T>> {
    let mut out = BTreeMap::new();
    for (key, value) in raw {
        let severity = Severity::parse(key)
            .ok_or_else(|| AppError::config(format!("unknown severity '{key}' in {field}")))?;
        out.insert(severity, *value);
    }
    Ok(out)
}

fn required(field: &str, value: Option<f64>) -> AppResult<f64> {
    let value = value.ok_or_else(|| AppError::config(format!("missing {field}")))?;
    non_negative(field, value)
}

fn optional(field: &str, value: Option<f64>, default: f64) -> AppResult<f64> {
    match value {
        Some(value) => non_negative(field, value),
        None => Ok(default),
    }
}

fn non_negative(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::config(format!(
            "{field} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(value)
}

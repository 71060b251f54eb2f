use crate::model::Alarm;
use crate::score::{clamp_impact_pct, Breakdown, Contribution, Factor};

const MAX_CLAUSES: usize = 3;
const HIGH_IMPACT_PCT: f64 = 50.0;

/// Short operator-facing summary of the largest score terms. The severity
/// clause, when present, always leads.
pub fn build_reason(alarm: &Alarm, breakdown: &Breakdown) -> String {
    let contributions = breakdown.contributions();
    let mut picked: Vec<Contribution> = contributions
        .iter()
        .copied()
        .filter(|c| c.value > 0.0)
        .collect();
    // stable: equal magnitudes keep the contributions() order
    picked.sort_by(|a, b| b.value.total_cmp(&a.value));
    picked.truncate(MAX_CLAUSES);

    let has_severity = picked.iter().any(|c| c.factor == Factor::Severity);
    if alarm.severity.always_explained() && !has_severity {
        if picked.len() == MAX_CLAUSES {
            picked.pop();
        }
        picked.push(contributions[0]);
    }
    if let Some(pos) = picked.iter().position(|c| c.factor == Factor::Severity) {
        let severity = picked.remove(pos);
        picked.insert(0, severity);
    }

    if picked.is_empty() {
        return clause(alarm, Factor::Severity);
    }
    picked
        .iter()
        .map(|c| clause(alarm, c.factor))
        .collect::<Vec<_>>()
        .join("; ")
}

fn clause(alarm: &Alarm, factor: Factor) -> String {
    match factor {
        Factor::Severity => format!("{} severity", alarm.severity),
        Factor::ServiceAffecting => "service affecting".to_string(),
        Factor::TrafficImpact => {
            let pct = round_hundredths(clamp_impact_pct(alarm.traffic_impact_pct));
            if pct >= HIGH_IMPACT_PCT {
                format!("high traffic impact ({}%)", format_number(pct))
            } else {
                format!("traffic impact ({}%)", format_number(pct))
            }
        }
        Factor::AffectedLinks => match alarm.affected_links {
            1 => "1 link affected".to_string(),
            n => format!("{n} links affected"),
        },
        Factor::Occurrence => format!(
            "recurring {} occ/hr",
            format_number(alarm.occurrences_per_hour)
        ),
        Factor::Duration => format!("active {}h", format_number(alarm.duration_hours())),
    }
}

/// Rounds to the precision `format_number` prints, so labels agree with the
/// value shown next to them.
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_number(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

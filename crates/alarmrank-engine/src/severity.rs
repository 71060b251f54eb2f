use serde::{Deserialize, Serialize};
use std::fmt;

/// Alarm severity class, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Warning,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Warning,
        Severity::Info,
    ];

    /// Exact match on the canonical name; anything else is unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Critical" => Some(Severity::Critical),
            "Major" => Some(Severity::Major),
            "Minor" => Some(Severity::Minor),
            "Warning" => Some(Severity::Warning),
            "Info" => Some(Severity::Info),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Major => "Major",
            Severity::Minor => "Minor",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    /// Short label used by the table report.
    pub fn abbrev(self) -> &'static str {
        match self {
            Severity::Critical => "CRIT",
            Severity::Major => "MAJ",
            Severity::Minor => "MIN",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        }
    }

    /// Default tie-break tier; lower ranks first.
    pub fn default_tier(self) -> i64 {
        match self {
            Severity::Critical => 1,
            Severity::Major => 2,
            Severity::Minor => 3,
            Severity::Warning => 4,
            Severity::Info => 5,
        }
    }

    pub fn always_explained(self) -> bool {
        matches!(self, Severity::Critical | Severity::Major)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_canonical_names() {
        for severity in Severity::ALL {
            assert_eq!(Severity::parse(severity.as_str()), Some(severity));
        }
        assert_eq!(Severity::parse("critical"), None);
        assert_eq!(Severity::parse("Unknown"), None);
        assert_eq!(Severity::parse(""), None);
    }

    #[test]
    fn default_tiers_follow_severity_order() {
        let tiers: Vec<i64> = Severity::ALL.iter().map(|s| s.default_tier()).collect();
        assert!(tiers.windows(2).all(|w| w[0] < w[1]));
    }
}

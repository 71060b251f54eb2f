pub mod config;
pub mod model;
pub mod rank;
pub mod reason;
pub mod score;
pub mod severity;

pub use config::{ScoringConfig, ScoringDocument};
pub use model::{Alarm, AlarmRecord, ScoreResult};
pub use rank::{prioritize, rank_alarms, RankOptions};
pub use score::{score_alarm, score_alarm_at, Scored};
pub use severity::Severity;

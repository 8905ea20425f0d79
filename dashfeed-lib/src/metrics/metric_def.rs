use super::MetricKey;
use crate::normalize::{CommitCountRecord, NormalizedGameStat};

#[derive(Debug)]
pub struct MetricDef<R: 'static> {
    pub key: MetricKey,
    pub description: &'static str,
    pub extractor: fn(&R) -> f64,
}

macro_rules! metric_def {
    ($key:ident, $description:expr, $extractor:expr) => {
        MetricDef {
            key: MetricKey::$key,
            description: $description,
            extractor: $extractor,
        }
    };
}

/// Metrics published for every game, in the order they are sent
pub const GAME_METRICS: &[MetricDef<NormalizedGameStat>] = &[
    metric_def!(Points, "Points scored", |stat: &NormalizedGameStat| stat.points),
    metric_def!(Rebounds, "Total rebounds", |stat: &NormalizedGameStat| stat.rebounds),
    metric_def!(Assists, "Assists", |stat: &NormalizedGameStat| stat.assists),
    metric_def!(Minutes, "Minutes played", |stat: &NormalizedGameStat| stat.minutes),
    metric_def!(FgPct, "Field goals made over field goals attempted", |stat: &NormalizedGameStat| stat.fg_pct),
    metric_def!(TsPct, "True-shooting percentage", |stat: &NormalizedGameStat| stat.ts_pct),
];

/// Metrics published for every day with commits
pub const COMMIT_METRICS: &[MetricDef<CommitCountRecord>] = &[metric_def!(
    Commits,
    "Commits made on the day",
    |record: &CommitCountRecord| f64::from(record.count)
)];

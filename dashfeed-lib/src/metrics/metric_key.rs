use serde::Serialize;
use strum::Display;

/// Key under which a metric is stored on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[cfg_attr(test, derive(strum::EnumIter, strum::IntoStaticStr))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MetricKey {
    Points,
    Rebounds,
    Assists,
    Minutes,
    FgPct,
    TsPct,
    Commits,
}

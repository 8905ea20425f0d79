use super::metric_def::{COMMIT_METRICS, GAME_METRICS, MetricDef};
use super::{Attribute, MetricDataPoint};
use crate::normalize::{CommitCountRecord, NormalizedGameStat};

/// A canonical row that fans out into tagged metric data points
pub trait MetricRow: Sized + 'static {
    /// Metrics extracted from every row of this kind, in push order
    fn definitions() -> &'static [MetricDef<Self>];

    fn date(&self) -> &str;

    fn attributes(&self) -> Vec<Attribute>;

    /// Short human-readable identification of the row for log lines
    fn label(&self) -> String;

    /// Every data point for this row, all sharing the row's date and attributes.
    fn data_points(&self) -> Vec<MetricDataPoint> {
        let attributes = self.attributes();

        Self::definitions()
            .iter()
            .map(|def| MetricDataPoint {
                key: def.key,
                value: (def.extractor)(self),
                date: self.date().to_string(),
                attributes: attributes.clone(),
            })
            .collect()
    }
}

impl MetricRow for NormalizedGameStat {
    fn definitions() -> &'static [MetricDef<Self>] {
        GAME_METRICS
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn attributes(&self) -> Vec<Attribute> {
        vec![Attribute::new("opposing_team", &self.opposing_team), Attribute::new("season", &self.season)]
    }

    fn label(&self) -> String {
        format!("game on {} against {}", self.date, self.opposing_team)
    }
}

impl MetricRow for CommitCountRecord {
    fn definitions() -> &'static [MetricDef<Self>] {
        COMMIT_METRICS
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn attributes(&self) -> Vec<Attribute> {
        vec![Attribute::new("repository", &self.repository)]
    }

    fn label(&self) -> String {
        format!("{} commit(s) on {}", self.count, self.date)
    }
}

use super::{MetricsSink, PushError};
use crate::metrics::MetricRow;

const LOG_TARGET: &str = "   publish";

/// Outcome of publishing a table of rows, one entry per row in row order
#[derive(Debug)]
pub struct PublishReport {
    pub outcomes: Vec<Result<(), PushError>>,
}

impl PublishReport {
    #[must_use]
    pub fn sent(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.sent()
    }
}

/// Push every row to the sink, one call per row, in row order.
///
/// A failed push is logged and does not stop the remaining rows from being pushed.
pub async fn publish_rows<R, S>(sink: &mut S, rows: &[R]) -> PublishReport
where
    R: MetricRow,
    S: MetricsSink,
{
    for def in R::definitions() {
        log::debug!(target: LOG_TARGET, "Metric '{}': {}", def.key, def.description);
    }

    let mut outcomes = Vec::with_capacity(rows.len());

    for row in rows {
        let points = row.data_points();
        let outcome = sink.push(&points).await;

        match &outcome {
            Ok(()) => log::info!(target: LOG_TARGET, "Pushed {} metric(s) for {}", points.len(), row.label()),
            Err(e @ PushError::Api { .. }) => log::error!(target: LOG_TARGET, "Could not push {}: {e}", row.label()),
            Err(e @ PushError::Other(_)) => log::error!(target: LOG_TARGET, "Unexpected error pushing {}: {e}", row.label()),
        }

        outcomes.push(outcome);
    }

    let report = PublishReport { outcomes };
    log::info!(target: LOG_TARGET, "Published {} row(s), {} failed", report.sent(), report.failed());
    report
}

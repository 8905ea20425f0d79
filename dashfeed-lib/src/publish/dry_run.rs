use super::{MetricsSink, PushError};
use crate::metrics::MetricDataPoint;
use ohno::IntoAppError;
use std::io::Write;

/// Sink that prints each push as one JSON line instead of sending it
#[derive(Debug)]
pub struct DryRunSink<W> {
    out: W,
}

impl<W: Write> DryRunSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MetricsSink for DryRunSink<W> {
    async fn push(&mut self, points: &[MetricDataPoint]) -> Result<(), PushError> {
        let line = serde_json::to_string(points).into_app_err("encoding data points")?;
        writeln!(self.out, "{line}").into_app_err("writing data points")?;
        Ok(())
    }
}

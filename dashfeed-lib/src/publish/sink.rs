use crate::metrics::MetricDataPoint;
use core::fmt::{Display, Formatter};

/// Why a single push was not accepted
#[derive(Debug)]
pub enum PushError {
    /// The dashboard answered, but rejected the push.
    Api { status: u16, message: String },

    /// The push never got a verdict: transport, encoding, or output failure.
    Other(ohno::AppError),
}

impl Display for PushError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Api { status, message } if message.is_empty() => write!(f, "dashboard rejected push with status {status}"),
            Self::Api { status, message } => write!(f, "dashboard rejected push with status {status}: {message}"),
            Self::Other(e) => write!(f, "{e:#}"),
        }
    }
}

impl From<ohno::AppError> for PushError {
    fn from(e: ohno::AppError) -> Self {
        Self::Other(e)
    }
}

/// Destination for metric data points, one call per canonical row
pub trait MetricsSink {
    /// Submit every data point of one row in a single call.
    fn push(&mut self, points: &[MetricDataPoint]) -> impl Future<Output = Result<(), PushError>>;
}

use super::MetricKey;
use serde::Serialize;

/// Dimensional tag attached to a data point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: &'static str,
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self { key, value: value.into() }
    }
}

/// One value pushed to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDataPoint {
    pub key: MetricKey,
    pub value: f64,
    /// ISO-8601 calendar date
    pub date: String,
    pub attributes: Vec<Attribute>,
}

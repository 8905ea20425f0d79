//! Fan-out of canonical rows into tagged metric data points
//!
//! Each canonical row type implements [`MetricRow`], pairing a static table of metric
//! definitions with the dimensional attributes every point of that row carries:
//!
//! - a game row yields six points (`points`, `rebounds`, `assists`, `minutes`, `fg_pct`,
//!   `ts_pct`) tagged with `opposing_team` and `season`
//! - a commit-count row yields one `commits` point tagged with `repository`
//!
//! Definitions are statically registered in `metric_def.rs`, each with an extractor
//! that pulls the value out of a row.

mod data_point;
mod metric_def;
mod metric_key;
mod metric_row;

pub use data_point::{Attribute, MetricDataPoint};
pub use metric_key::MetricKey;
pub use metric_row::MetricRow;

#[cfg(any(debug_assertions, test))]
pub use metric_def::{COMMIT_METRICS, GAME_METRICS, MetricDef};

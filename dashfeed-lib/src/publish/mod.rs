//! Pushing metric data points to the dashboard
//!
//! [`publish_rows`] walks a table of canonical rows in order and makes one
//! [`MetricsSink::push`] call per row. Push failures are isolated per row: they are
//! logged, recorded in the [`PublishReport`], and the next row is pushed regardless.
//!
//! [`DataboxSink`] is the real destination; [`DryRunSink`] prints each push as a JSON line.

mod databox;
mod dry_run;
mod publisher;
mod sink;

pub use databox::DataboxSink;
pub use dry_run::DryRunSink;
pub use publisher::{PublishReport, publish_rows};
pub use sink::{MetricsSink, PushError};

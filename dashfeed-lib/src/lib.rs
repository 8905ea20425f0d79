#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for dashfeed
//!
//! This library holds all functionality for the dashfeed tool, which fetches a player's
//! game-by-game box scores and a repository's commit activity, reshapes both into flat
//! time series, and pushes them to a metrics dashboard.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`sources`]: Fetching raw records from the stats and commit-history APIs
//! - [`normalize`]: Pure transforms from raw records to canonical rows
//! - [`metrics`]: Fan-out of canonical rows into tagged metric data points
//! - [`publish`]: Pushing data points to the dashboard, one row at a time

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod normalize;
#[cfg(not(any(debug_assertions, test)))]
mod normalize;

#[cfg(any(debug_assertions, test))]
pub mod publish;
#[cfg(not(any(debug_assertions, test)))]
mod publish;

#[cfg(any(debug_assertions, test))]
pub mod sources;
#[cfg(not(any(debug_assertions, test)))]
mod sources;

pub use crate::commands::{Host, run};

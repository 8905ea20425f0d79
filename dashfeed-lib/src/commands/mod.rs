//! Command-line interface and orchestration for dashfeed
//!
//! This module implements the CLI commands and wires the sources, the normalizer, and the
//! publisher together into end-to-end runs.
//!
//! # Commands
//!
//! - **games**: look up a player, fetch their game log for each configured season,
//!   normalize the games, and push six metrics per game
//! - **commits**: fetch a repository's full commit history, count commits per day, and push
//!   one metric per day
//! - **init**: generate a default configuration file
//!
//! # Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. The games and commits commands follow the same pattern:
//!
//! 1. Set up logging and load configuration, applying command-line overrides
//! 2. Create the destination, failing early when no dashboard token is available
//! 3. Fetch raw records; any fetch failure ends the run before anything is pushed
//! 4. Normalize the records into canonical rows
//! 5. Push each row, logging and counting failures without stopping
//!
//! Configuration is managed through an optional TOML file layered over built-in defaults.

mod commits;
mod common;
mod config;
mod games;
mod host;
mod init;
mod run;

#[cfg(debug_assertions)]
pub use config::Config;

pub use commits::{CommitsArgs, process_commits};
pub use games::{GamesArgs, process_games};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;

//! Command dispatch logic for dashfeed

use super::{CommitsArgs, GamesArgs, InitArgs, init_config, process_commits, process_games};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "dashfeed", author, version, long_about = None)]
#[command(about = "Push basketball box scores and commit activity to a metrics dashboard")]
#[command(styles = CLAP_STYLES)]
struct Args {
    #[command(subcommand)]
    command: DashfeedSubcommand,
}

#[derive(Subcommand, Debug)]
enum DashfeedSubcommand {
    /// Publish a player's per-game box scores
    Games(Box<GamesArgs>),
    /// Publish a repository's commits per day
    Commits(Box<CommitsArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Args::parse_from(args).command {
        DashfeedSubcommand::Games(games_args) => process_games(host, games_args).await,
        DashfeedSubcommand::Commits(commits_args) => process_commits(host, commits_args).await,
        DashfeedSubcommand::Init(init_args) => init_config(host, init_args),
    }
}

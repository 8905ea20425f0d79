use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::normalize::normalize_games;
use crate::sources::stats::Provider;
use clap::Parser;

const LOG_TARGET: &str = "     games";

#[derive(Parser, Debug)]
pub struct GamesArgs {
    /// Player to publish, overriding the configuration file
    #[arg(long, value_name = "NAME")]
    pub player: Option<String>,

    /// Season to publish, e.g. 2023-24; repeat for several, overriding the configuration file
    #[arg(long = "season", value_name = "SEASON")]
    pub seasons: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Fetch a player's games, normalize them, and push one set of metrics per game.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, no dashboard token is available, or
/// fetching or normalizing the games fails. Failed pushes are reported, not returned.
pub async fn process_games<H: Host>(host: &mut H, args: &GamesArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    if let Some(player) = &args.player {
        common.config.player.clone_from(player);
    }
    if !args.seasons.is_empty() {
        common.config.seasons.clone_from(&args.seasons);
    }
    common.config.validate()?;

    let destination = common.destination(&args.common)?;

    let provider = Provider::new(&common.config.stats_base_url, common.config.request_timeout)?;
    let raw_games = provider.get_game_stats(&common.config.player, &common.config.seasons).await?;
    let rows = normalize_games(&raw_games)?;

    log::info!(target: LOG_TARGET, "Publishing {} game(s) for {}", rows.len(), common.config.player);
    let _ = common.publish(destination, &rows).await;
    Ok(())
}

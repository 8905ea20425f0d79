use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::normalize::aggregate_commit_dates;
use crate::sources::hosting::Provider;
use clap::Parser;

const LOG_TARGET: &str = "   commits";

#[derive(Parser, Debug)]
pub struct CommitsArgs {
    /// Repository to publish, as owner/repo or a GitHub URL, overriding the configuration file
    #[arg(long, value_name = "REPO")]
    pub repository: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Fetch a repository's commits, count them per day, and push one metric per day.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, no dashboard token is available, or
/// fetching the commit history fails. Failed pushes are reported, not returned.
pub async fn process_commits<H: Host>(host: &mut H, args: &CommitsArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    if let Some(repository) = &args.repository {
        common.config.repository.clone_from(repository);
    }
    let repo_spec = common.config.repo_spec()?;

    let destination = common.destination(&args.common)?;

    let provider = Provider::new(common.github_token(), &common.config.github_base_url, common.config.request_timeout)?;
    let dates = provider.get_commit_dates(&repo_spec).await?;
    let rows = aggregate_commit_dates(&dates, repo_spec.repo());

    log::info!(target: LOG_TARGET, "Publishing {} day(s) of commit activity for '{repo_spec}'", rows.len());
    let _ = common.publish(destination, &rows).await;
    Ok(())
}

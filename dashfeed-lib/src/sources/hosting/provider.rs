use super::client::{Client, Commit};
use crate::Result;
use crate::sources::RepoSpec;
use core::time::Duration;
use ohno::EnrichableExt;
use std::collections::HashSet;
use url::Url;

const LOG_TARGET: &str = "   hosting";
const COMMIT_PAGE_SIZE: u8 = 100;

#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
}

impl Provider {
    pub fn new(token: Option<&str>, base_url: &Url, timeout: Duration) -> Result<Self> {
        if token.is_none_or(str::is_empty) {
            log::debug!(target: LOG_TARGET, "No GitHub token configured, using anonymous requests");
        }

        Ok(Self {
            client: Client::new(token, base_url.clone(), timeout)?,
        })
    }

    /// Fetch the calendar date (`YYYY-MM-DD`) of every commit in the repository's default branch.
    ///
    /// Pages are followed through the `Link` header until no next page is offered, a page
    /// comes back empty, or a page URL repeats. Any failed page fails the whole fetch.
    pub async fn get_commit_dates(&self, repo_spec: &RepoSpec) -> Result<Vec<String>> {
        log::info!(target: LOG_TARGET, "Fetching commit history for repository '{repo_spec}'");

        let mut next = Some(self.client.commits_url(repo_spec.owner(), repo_spec.repo(), COMMIT_PAGE_SIZE)?);
        let mut visited = HashSet::new();
        let mut dates = Vec::new();
        let mut page_count = 0_u32;

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                log::warn!(target: LOG_TARGET, "Pagination for '{repo_spec}' revisited {url}, stopping");
                break;
            }

            page_count += 1;
            log::debug!(target: LOG_TARGET, "Fetching commit page {page_count} for '{repo_spec}'");

            let page = self
                .client
                .commits_page(&url)
                .await
                .map_err(|e| e.enrich_with(|| format!("fetching commits for repository '{repo_spec}'")))?;

            if page.items.is_empty() {
                break;
            }

            dates.extend(page.items.iter().filter_map(commit_date));
            next = page.next;
        }

        log::info!(target: LOG_TARGET, "Fetched {} commit(s) for '{repo_spec}' across {page_count} page(s)", dates.len());
        Ok(dates)
    }
}

fn commit_date(commit: &Commit) -> Option<String> {
    let date = commit.commit.author.as_ref().and_then(|a| a.date.as_deref());
    let calendar = date.and_then(calendar_date);

    if calendar.is_none() {
        log::debug!(target: LOG_TARGET, "Skipping commit without a usable author date: {date:?}");
    }

    calendar.map(str::to_string)
}

/// Calendar-date portion of an ISO-8601 timestamp.
fn calendar_date(timestamp: &str) -> Option<&str> {
    timestamp.get(..10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::hosting::client::{CommitDetail, Signature};

    fn commit(date: Option<&str>) -> Commit {
        Commit {
            commit: CommitDetail {
                author: Some(Signature {
                    date: date.map(String::from),
                }),
            },
        }
    }

    #[test]
    fn test_calendar_date() {
        assert_eq!(calendar_date("2025-02-07T12:34:56Z"), Some("2025-02-07"));
        assert_eq!(calendar_date("2025-02-07"), Some("2025-02-07"));
        assert_eq!(calendar_date("2025-02"), None);
    }

    #[test]
    fn test_commit_date() {
        assert_eq!(commit_date(&commit(Some("2025-02-06T23:59:59Z"))).as_deref(), Some("2025-02-06"));
    }

    #[test]
    fn test_commit_date_missing() {
        assert_eq!(commit_date(&commit(None)), None);
        assert_eq!(
            commit_date(&Commit {
                commit: CommitDetail { author: None }
            }),
            None
        );
    }

    #[test]
    fn test_provider_new_anonymous() {
        let base = Url::parse("https://api.github.com").unwrap();
        let _provider = Provider::new(None, &base, Duration::from_secs(5)).unwrap();
        let _provider = Provider::new(Some(""), &base, Duration::from_secs(5)).unwrap();
    }
}

use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;
use std::sync::Arc;
use url::Url;

/// Identity of a hosted repository, `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    /// Parse either a bare `owner/repo` pair or a repository URL such as
    /// `https://github.com/owner/repo`.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();

        if spec.contains("://") {
            let Ok(url) = Url::parse(spec) else {
                bail!("invalid repository URL: {spec}");
            };
            return Self::from_url(&url);
        }

        let segments: Vec<_> = spec.split('/').collect();
        match segments.as_slice() {
            [owner, repo] => Self::from_parts(owner, repo, spec),
            _ => bail!("invalid repository '{spec}': expected 'owner/repo'"),
        }
    }

    fn from_url(url: &Url) -> Result<Self> {
        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        match path_segments.as_slice() {
            [owner, repo, ..] => Self::from_parts(owner, repo, url.as_str()),
            _ => bail!("invalid repository URL format: {url}"),
        }
    }

    fn from_parts(owner: &str, repo: &str, original: &str) -> Result<Self> {
        let repo = repo.trim_end_matches(".git");

        if owner.is_empty() || repo.is_empty() {
            bail!("invalid repository '{original}': empty owner or repo name");
        }

        Ok(Self {
            owner: Arc::from(owner),
            repo: Arc::from(repo),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

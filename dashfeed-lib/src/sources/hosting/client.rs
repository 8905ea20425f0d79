//! GitHub API client
//!
//! Minimal GitHub API client for listing a repository's commits.

use crate::Result;
use crate::sources::http;
use core::time::Duration;
use ohno::IntoAppError;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK};
use serde::Deserialize;
use url::Url;

/// Minimal commit listing entry with only the fields we need
#[derive(Debug, Deserialize)]
pub struct Commit {
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetail {
    pub author: Option<Signature>,
}

/// Author signature. The date is kept as text; only its calendar-date prefix is ever used.
#[derive(Debug, Deserialize)]
pub struct Signature {
    pub date: Option<String>,
}

/// One page of a paginated listing
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<Url>,
}

/// GitHub API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a new GitHub API client with optional bearer token
    pub fn new(token: Option<&str>, base_url: Url, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(t) = token.filter(|t| !t.is_empty()) {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}")).into_app_err("building authorization header")?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        Ok(Self {
            client: http::build_client(http::USER_AGENT, headers, timeout)?,
            base_url,
        })
    }

    /// URL of the first page of a repository's commit listing
    pub fn commits_url(&self, owner: &str, repo: &str, per_page: u8) -> Result<Url> {
        let mut url = http::endpoint(&self.base_url, &format!("repos/{owner}/{repo}/commits"))?;
        let _ = url.query_pairs_mut().append_pair("per_page", &per_page.to_string());
        Ok(url)
    }

    /// Fetch one page of commits along with the link to the next page, if any
    pub async fn commits_page(&self, url: &Url) -> Result<Page<Commit>> {
        let resp = http::get(&self.client, url).await?;
        let next = next_page_url(resp.headers());
        let items = resp.json().await.into_app_err_with(|| format!("decoding commit listing from {url}"))?;

        Ok(Page { items, next })
    }
}

/// Extract the `rel="next"` target from a `Link` response header.
pub fn next_page_url(headers: &HeaderMap) -> Option<Url> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| matches!(param.trim(), r#"rel="next""# | "rel=next"));
        if !is_next {
            return None;
        }

        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        Url::parse(target).ok()
    })
}

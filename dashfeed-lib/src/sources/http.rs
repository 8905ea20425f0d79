//! HTTP plumbing shared by the source clients.

use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, app_err, bail};
use reqwest::header::HeaderMap;
use url::Url;

/// User agent sent to APIs that do not require a browser-like one
pub const USER_AGENT: &str = concat!("dashfeed/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP client with the given identity, default headers, and per-request timeout.
pub fn build_client(user_agent: &str, default_headers: HeaderMap, timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .default_headers(default_headers)
        .timeout(timeout)
        .build()
        .into_app_err("creating HTTP client")
}

/// Append path segments to a base URL, keeping any path the base already has.
///
/// `https://stats.nba.com/stats` + `playergamelog` yields `https://stats.nba.com/stats/playergamelog`,
/// which [`Url::join`] would not do for a base without a trailing slash.
pub fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let mut url = base.clone();
    {
        let Ok(mut segments) = url.path_segments_mut() else {
            bail!("base URL '{base}' cannot carry a path");
        };
        let _ = segments.pop_if_empty().extend(path.split('/').filter(|s| !s.is_empty()));
    }
    Ok(url)
}

/// Issue a GET request and fail on any non-success status.
pub async fn get(client: &reqwest::Client, url: &Url) -> Result<reqwest::Response> {
    let resp = client
        .get(url.clone())
        .send()
        .await
        .into_app_err_with(|| format!("requesting {url}"))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(app_err!("unexpected HTTP status {status} from {url}"));
    }

    Ok(resp)
}

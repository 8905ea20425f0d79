//! Databox push API sink
//!
//! Every push is a `POST {base}/data` carrying a JSON array of data points, authenticated
//! with HTTP basic auth (the token as user name, empty password).

use super::{MetricsSink, PushError};
use crate::Result;
use crate::metrics::MetricDataPoint;
use crate::sources::http;
use core::fmt::{Debug, Formatter};
use core::time::Duration;
use ohno::{IntoAppError, bail};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use url::Url;

const LOG_TARGET: &str = "   databox";

const DATABOX_MEDIA_TYPE: &str = "application/vnd.databox.v2+json";

pub struct DataboxSink {
    client: reqwest::Client,
    data_url: Url,
    token: String,
}

impl DataboxSink {
    /// Create a sink for the given push token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or blank. No network call is made here.
    pub fn new(token: Option<&str>, base_url: &Url, timeout: Duration) -> Result<Self> {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            bail!("no Databox token configured, set the DATABOX_API environment variable or pass --databox-token");
        };

        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(DATABOX_MEDIA_TYPE));

        Ok(Self {
            client: http::build_client(http::USER_AGENT, headers, timeout)?,
            data_url: http::endpoint(base_url, "data")?,
            token: token.to_string(),
        })
    }

    #[must_use]
    pub const fn data_url(&self) -> &Url {
        &self.data_url
    }
}

impl Debug for DataboxSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DataboxSink")
            .field("data_url", &self.data_url)
            .finish_non_exhaustive()
    }
}

impl MetricsSink for DataboxSink {
    async fn push(&mut self, points: &[MetricDataPoint]) -> Result<(), PushError> {
        log::debug!(target: LOG_TARGET, "Pushing {} data point(s) to {}", points.len(), self.data_url);

        let resp = self
            .client
            .post(self.data_url.clone())
            .basic_auth(&self.token, Some(""))
            .json(points)
            .send()
            .await
            .into_app_err_with(|| format!("pushing to {}", self.data_url))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let message = resp.text().await.unwrap_or_default().trim().to_string();
        Err(PushError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://push.databox.com").unwrap()
    }

    #[test]
    fn test_new_requires_token() {
        let _ = DataboxSink::new(None, &base(), Duration::from_secs(5)).unwrap_err();
        let _ = DataboxSink::new(Some(""), &base(), Duration::from_secs(5)).unwrap_err();
        let _ = DataboxSink::new(Some("   "), &base(), Duration::from_secs(5)).unwrap_err();
    }

    #[test]
    fn test_new_with_token() {
        let sink = DataboxSink::new(Some("secret"), &base(), Duration::from_secs(5)).unwrap();
        assert_eq!(sink.data_url().as_str(), "https://push.databox.com/data");
    }

    #[test]
    fn test_debug_hides_token() {
        let sink = DataboxSink::new(Some("secret"), &base(), Duration::from_secs(5)).unwrap();
        let text = format!("{sink:?}");
        assert!(!text.contains("secret"));
        assert!(text.contains("push.databox.com"));
    }
}

//! HTTP client for the bugmenot view page.
//!
//! Not a browser — one plain GET per lookup. No retries, no cookies,
//! no custom timeout beyond the transport default.

use crate::error::Error;
use tracing::debug;

/// Site root queried for per-domain views.
pub const DEFAULT_BASE_URL: &str = "http://bugmenot.com";

/// HTTP client for the lookup pipeline.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client with a standard Chrome user-agent, pointed at bugmenot.com.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client pointed at an alternate site root (used by tests).
    pub fn with_base_url(base_url: &str) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn view_url(&self, domain: &str) -> String {
        format!("{}/view/{}", self.base_url, domain)
    }

    /// Fetch the view page for `domain` and return the response body.
    ///
    /// Exactly one request: a non-200 status or a transport failure is
    /// surfaced immediately, never retried. The response is fully consumed
    /// on the success path and dropped (releasing the connection) on every
    /// error path.
    pub async fn fetch_view(&self, domain: &str) -> Result<String, Error> {
        let url = self.view_url(domain);
        debug!("GET {url}");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = resp.text().await?;
        debug!("{} byte(s) of HTML from {url}", body.len());
        Ok(body)
    }
}

//! reqwest-backed page transport
//!
//! One [`HttpSession`] wraps one `reqwest::Client`, and therefore one
//! connection pool. Sessions are opened per query and dropped with it.

use std::time::Duration;

use reqwest::{Client as ReqwestClient, StatusCode};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, error, instrument};
use url::Url;

use super::{FetchError, PageFetcher, Transport};

/// Opens pooled HTTP sessions against the catalog
#[derive(Debug, Clone)]
pub struct HttpTransport {
    user_agent: String,
    request_timeout: Duration,
}

impl HttpTransport {
    /// Create a transport sending the given user agent
    pub fn new(user_agent: impl Into<String>, request_timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            request_timeout,
        }
    }
}

impl Transport for HttpTransport {
    type Session = HttpSession;

    fn open_session(&self) -> Result<HttpSession, FetchError> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| FetchError::Session(format!("invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, agent);
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,*/*;q=0.8"));

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| FetchError::Session(e.to_string()))?;

        debug!("Opened HTTP session");
        Ok(HttpSession { client })
    }
}

/// A single query's HTTP session
#[derive(Debug)]
pub struct HttpSession {
    client: ReqwestClient,
}

impl PageFetcher for HttpSession {
    #[instrument(skip(self), fields(url = %url), level = "debug")]
    async fn fetch_page(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            error!("Catalog has no page at {}", url);
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            error!("Catalog returned {} for {}", status, url);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;
        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}

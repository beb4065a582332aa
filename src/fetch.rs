//! URL validation and the single HTTP GET that retrieves the standings body.

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use tracing::{debug, info};
use url::Url;

/// Parse the input line as an absolute http(s) URL
///
/// # Errors
///
/// Returns [`Error::MalformedUrl`] naming the offending input when it does not
/// parse, or when its scheme is anything other than `http`/`https`.
pub fn parse_url(input: &str) -> Result<Url> {
    let parsed = Url::parse(input).map_err(|e| Error::MalformedUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::MalformedUrl {
            url: input.to_string(),
            reason: format!("scheme '{scheme}' is not supported; only http and https are"),
        }),
    }
}

/// Performs the HTTP GET for one run
///
/// Built once from [`FetchConfig`] and passed to the pipeline; there is no
/// shared client.
#[derive(Clone, Debug)]
pub struct Fetcher {
    http_client: reqwest::Client,
    timeout: Option<std::time::Duration>,
}

impl Fetcher {
    /// Create a fetcher from the fetch settings
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| Error::Config {
            message: format!("Failed to create HTTP client: {}", e),
            key: None,
        })?;

        Ok(Self {
            http_client,
            timeout: config.timeout,
        })
    }

    /// GET `url` and return the full response body
    ///
    /// # Errors
    /// Returns [`Error::Fetch`] carrying the URL if:
    /// - the connection cannot be established or the request times out
    /// - the response status is not 2xx
    /// - the body cannot be read
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("Sending GET {}", url);

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                reason: format!("HTTP status {}", status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch {
                url: url.to_string(),
                reason: format!("failed to read response body: {}", e),
            })?
            .to_vec();

        info!(status = status.as_u16(), bytes = body.len(), "Fetched {}", url);
        Ok(body)
    }

    fn transport_error(&self, url: &Url, e: reqwest::Error) -> Error {
        let reason = if e.is_timeout() {
            match self.timeout {
                Some(timeout) => format!("request timed out after {:?}", timeout),
                None => "request timed out".to_string(),
            }
        } else if e.is_connect() {
            format!("connection failed: {}", e)
        } else {
            format!("request failed: {}", e)
        };

        Error::Fetch {
            url: url.to_string(),
            reason,
        }
    }
}

//! Single-request page fetcher.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// Transport-level failure while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    #[error("failed to connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A page that answered with some HTTP status.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    /// URL after redirects.
    pub final_url: String,
    pub body: String,
    /// Status is in the 200-399 range.
    pub ok: bool,
}

/// Build the HTTP client used for a check.
///
/// # Errors
///
/// Returns an error if a configured header value is not valid or the client
/// cannot be constructed.
pub fn build_client(config: &Config) -> anyhow::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(&config.accept_language)?,
    );

    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Perform one GET request and read the body as text.
///
/// `timeout` is only used to describe a timeout; the client enforces it.
///
/// # Errors
///
/// Returns an error on DNS, connection, TLS or timeout failures, or if the
/// body cannot be read.
pub async fn fetch_page(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<FetchedPage, FetchError> {
    debug!(url = %url, "Fetching page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify(url, timeout, e, false))?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();

    let body = response
        .text()
        .await
        .map_err(|e| classify(url, timeout, e, true))?;

    debug!(url = %url, status, bytes = body.len(), "Fetched page");

    Ok(FetchedPage {
        status,
        final_url,
        body,
        ok: is_ok_status(status),
    })
}

/// Whether a status counts as a reachable page.
#[must_use]
pub fn is_ok_status(status: u16) -> bool {
    (200..400).contains(&status)
}

fn classify(url: &str, timeout: Duration, e: reqwest::Error, reading_body: bool) -> FetchError {
    let url = url.to_string();
    if e.is_timeout() {
        FetchError::Timeout { url, timeout }
    } else if reading_body {
        FetchError::Body { url, source: e }
    } else if e.is_connect() {
        FetchError::Connect { url, source: e }
    } else {
        FetchError::Request { url, source: e }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_status() {
        assert!(is_ok_status(200));
        assert!(is_ok_status(204));
        assert!(is_ok_status(301));
        assert!(is_ok_status(399));
        assert!(!is_ok_status(199));
        assert!(!is_ok_status(400));
        assert!(!is_ok_status(404));
        assert!(!is_ok_status(503));
    }

    #[test]
    fn test_timeout_message() {
        let err = FetchError::Timeout {
            url: "https://example.com".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert_eq!(
            err.to_string(),
            "request to https://example.com timed out after 10s"
        );
    }

    #[test]
    fn test_build_client_rejects_bad_header() {
        let config = Config {
            accept_language: "en\nUS".to_string(),
            ..Config::for_testing()
        };
        assert!(build_client(&config).is_err());
    }
}

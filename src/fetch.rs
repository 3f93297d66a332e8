//! Clip acquisition
//!
//! Fetches raw audio bytes for clip URLs. The pipeline talks to the
//! [`ClipFetcher`] trait so tests can substitute an in-memory source;
//! [`HttpFetcher`] is the production implementation.

use std::time::Duration;

use log::debug;

use crate::error::{AnsageError, Result};

/// Source of raw clip bytes, keyed by URL
pub trait ClipFetcher: Send + Sync {
    /// Fetch the full byte content of one clip
    ///
    /// A non-success response or transport failure is an error; partial
    /// content is never returned.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP fetcher backed by a blocking reqwest client
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Default request timeout
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a fetcher with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Self::TIMEOUT)
    }

    /// Create a fetcher with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnsageError::UnsupportedEnvironment {
                reason: format!("cannot build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

impl ClipFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching clip: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AnsageError::ClipUnavailable {
                url: url.to_string(),
                reason: if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                },
            })?;

        if !response.status().is_success() {
            return Err(AnsageError::ClipUnavailable {
                url: url.to_string(),
                reason: response.status().to_string(),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|e| AnsageError::ClipUnavailable {
                url: url.to_string(),
                reason: format!("failed to read body: {}", e),
            })?;

        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new().is_ok());
    }

    #[test]
    fn test_unreachable_host_is_clip_unavailable() {
        // Reserved TEST-NET-1 address, nothing listens there
        let fetcher = HttpFetcher::with_timeout(Duration::from_millis(200)).unwrap();
        let result = fetcher.fetch("http://192.0.2.1/clip.mp3");

        match result {
            Err(AnsageError::ClipUnavailable { url, .. }) => {
                assert!(url.contains("192.0.2.1"));
            }
            other => panic!("expected ClipUnavailable, got {:?}", other.map(|b| b.len())),
        }
    }
}

use crate::ports::outbound::PackageFetcher;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::time::Duration;

/// HttpPackageFetcher adapter for downloading package archives over HTTP(S)
///
/// This adapter implements the PackageFetcher port with a blocking reqwest
/// client. Redirects are followed, which matters for nuget.org: its
/// `/api/v2/package/...` endpoint answers with a redirect to the CDN.
///
/// A failed request is reported immediately; no retry is attempted.
pub struct HttpPackageFetcher {
    client: reqwest::blocking::Client,
}

impl HttpPackageFetcher {
    /// Creates a fetcher without a request timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Creates a fetcher with an optional overall request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nupkg-graph/{}", version);
        // The blocking builder defaults to a 30s timeout; pass `None` through explicitly.
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn transport_error(url: &str, details: impl Into<String>) -> anyhow::Error {
        GraphError::Transport {
            url: url.to_string(),
            details: details.into(),
        }
        .into()
    }
}

impl PackageFetcher for HttpPackageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Self::transport_error(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::transport_error(
                url,
                format!("Server returned HTTP status {}", status),
            ));
        }

        let body = response
            .bytes()
            .map_err(|e| Self::transport_error(url, format!("Failed to read body: {}", e)))?;

        Ok(body.to_vec())
    }
}

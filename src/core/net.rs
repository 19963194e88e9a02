// src/core/net.rs

// Blocking HTTP GET, one request per URL.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::BoxError;

/// Source of raw page markup. Implemented over HTTP for real runs and by
/// in-memory maps in tests.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, BoxError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client. Redirects follow reqwest's default policy.
    /// No timeout is applied unless one is given.
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            // blocking client defaults to 30s; keep "wait forever" unless configured
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, BoxError> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        let t = std::time::Instant::now();
        let body = resp.text()?;
        log::debug!("Read {} bytes from {url} in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::{AppError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Retrieval capability: given a URL, return the response body or fail.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetcher backed by a single client to reuse connections across requests.
/// Redirects are followed with the client's standard policy and a slow
/// remote cannot hold a handler past the request timeout.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .pool_max_idle_per_host(10)
            .user_agent("Mozilla/5.0 (compatible; LinkPreviewBot/1.0)")
            .build()?;

        Ok(HttpPageFetcher { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchError(format!("{url} answered {status}")));
        }

        let html = response.text().await?;
        Ok(html)
    }
}

use std::time::Duration;

use async_trait::async_trait;
use lexa_config::source::SourceConfig;
use lexa_core::{PageSource, SourceError};
use reqwest::StatusCode;

/// Fetches printable entry pages over HTTP.
#[derive(Clone)]
pub struct WiktionaryClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl WiktionaryClient {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            retry_delay: Duration::from_millis(500),
        })
    }

    /// Base delay between attempts; the n-th retry waits n times as long.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn page_url(&self, title: &str) -> String {
        let title = title
            .trim()
            .replace(' ', "_")
            .replace('?', "%3F")
            .replace('#', "%23");
        format!("{}/wiki/{title}", self.base_url)
    }

    async fn fetch_once(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .query(&[("printable", "yes")])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))
    }
}

#[async_trait]
impl PageSource for WiktionaryClient {
    async fn fetch_page(&self, title: &str) -> Result<String, SourceError> {
        let url = self.page_url(title);
        let mut attempt = 0;

        loop {
            match self.fetch_once(&url).await {
                Err(e) if attempt < self.max_retries && is_retryable(&e) => {
                    attempt += 1;
                    tracing::warn!("fetch attempt {attempt} for {url} failed: {e}, retrying");
                    tokio::time::sleep(self.retry_delay * attempt).await;
                }
                result => return result,
            }
        }
    }
}

fn is_retryable(error: &SourceError) -> bool {
    match error {
        SourceError::Network(_) => true,
        SourceError::Status { status, .. } => *status >= 500,
        SourceError::NotFound(_) => false,
    }
}

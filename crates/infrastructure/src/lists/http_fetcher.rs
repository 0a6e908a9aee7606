use super::feed_parser::{parse_feed, FeedFormat};
use async_trait::async_trait;
use govpl_verifier_application::ports::ListFetcher;
use govpl_verifier_domain::config::HttpConfig;
use govpl_verifier_domain::{DomainError, DomainSet, ListKind};
use reqwest::header::CACHE_CONTROL;
use std::time::Duration;
use tracing::{debug, info};

/// Downloads one remote list over HTTP(S) and parses it into a [`DomainSet`].
pub struct HttpListFetcher {
    client: reqwest::Client,
    url: String,
    format: FeedFormat,
}

impl HttpListFetcher {
    pub fn new(client: reqwest::Client, url: impl Into<String>, format: FeedFormat) -> Self {
        Self {
            client,
            url: url.into(),
            format,
        }
    }

    pub fn for_kind(client: reqwest::Client, kind: ListKind, url: impl Into<String>) -> Self {
        Self::new(client, url, FeedFormat::for_kind(kind))
    }

    pub fn format(&self) -> FeedFormat {
        self.format
    }
}

pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| DomainError::ListFetch(format!("failed to build HTTP client: {}", e)))
}

async fn fetch_url(url: &str, client: &reqwest::Client) -> Result<String, DomainError> {
    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|e| DomainError::ListFetch(format!("fetch error for {}: {}", url, e)))?;

    let status = response.status();
    debug!(url = %url, status = status.as_u16(), "List response received");
    if !status.is_success() {
        return Err(DomainError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| DomainError::ListFetch(format!("read error for {}: {}", url, e)))
}

#[async_trait]
impl ListFetcher for HttpListFetcher {
    async fn fetch(&self) -> Result<DomainSet, DomainError> {
        debug!(url = %self.url, format = ?self.format, "Downloading list");

        let body = fetch_url(&self.url, &self.client).await?;
        let set = DomainSet::from_entries(parse_feed(self.format, &body));

        if set.is_empty() {
            return Err(DomainError::EmptyList(self.url.clone()));
        }

        info!(url = %self.url, bytes = body.len(), domains = set.len(), "List downloaded");
        Ok(set)
    }

    fn source_url(&self) -> &str {
        &self.url
    }
}

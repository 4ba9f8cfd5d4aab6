use std::fmt;

use async_trait::async_trait;
use nd_core::{ArticleSource, Error, FetchError, FetchResult, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use url::Url;

use crate::providers::{decode_articles, ProviderKind};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Which provider to call and with what credential.
#[derive(Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub language: String,
    /// Full search endpoint URL, replacing the provider's default.
    pub base_url: Option<String>,
    /// Response field holding the article list, replacing the provider's default.
    pub envelope: Option<String>,
}

impl SourceConfig {
    pub fn new(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: None,
            envelope: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_envelope(mut self, envelope: impl Into<String>) -> Self {
        self.envelope = Some(envelope.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        self.base_url.as_deref().unwrap_or(self.provider.endpoint())
    }

    pub fn envelope(&self) -> &str {
        self.envelope.as_deref().unwrap_or(self.provider.envelope())
    }
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .field("base_url", &self.base_url)
            .field("envelope", &self.envelope)
            .finish()
    }
}

/// HTTP client for one news search provider.
#[derive(Debug, Clone)]
pub struct NewsClient {
    config: SourceConfig,
    endpoint: Url,
    http: reqwest::Client,
}

impl NewsClient {
    pub fn new(config: SourceConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "{} requires an API key",
                config.provider.name()
            )));
        }
        let endpoint = Url::parse(config.endpoint())
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", config.endpoint(), e)))?;
        Ok(Self {
            config,
            endpoint,
            http: reqwest::Client::new(),
        })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Search URL for `query`; parameters are percent-encoded.
    pub fn request_url(&self, query: &str, limit: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(self.config.provider.params(
            &self.config.api_key,
            query,
            limit,
            &self.config.language,
        ));
        url
    }
}

#[async_trait]
impl ArticleSource for NewsClient {
    fn name(&self) -> &str {
        self.config.provider.name()
    }

    #[instrument(level = "info", skip(self), fields(provider = self.config.provider.name()))]
    async fn fetch_articles(&self, query: &str, limit: usize) -> FetchResult {
        let url = self.request_url(query, limit);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;
        let mut articles = decode_articles(self.config.provider, &body, self.config.envelope())?;
        articles.truncate(limit);

        info!(count = articles.len(), "📰 Fetched articles");
        Ok(articles)
    }
}

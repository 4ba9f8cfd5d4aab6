use clap::ValueEnum;
use nd_core::{Article, FetchError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub mod gnews;
pub mod mediastack;
pub mod newsapi;
pub mod thenewsapi;

/// The news search APIs the reader can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(name = "gnews")]
    GNews,
    #[value(name = "newsapi")]
    NewsApi,
    #[value(name = "mediastack")]
    Mediastack,
    #[value(name = "thenewsapi")]
    TheNewsApi,
}

impl ProviderKind {
    pub fn all() -> [ProviderKind; 4] {
        [
            ProviderKind::GNews,
            ProviderKind::NewsApi,
            ProviderKind::Mediastack,
            ProviderKind::TheNewsApi,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::GNews => "GNews",
            ProviderKind::NewsApi => "NewsAPI",
            ProviderKind::Mediastack => "Mediastack",
            ProviderKind::TheNewsApi => "TheNewsAPI",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ProviderKind::GNews => gnews::ENDPOINT,
            ProviderKind::NewsApi => newsapi::ENDPOINT,
            ProviderKind::Mediastack => mediastack::ENDPOINT,
            ProviderKind::TheNewsApi => thenewsapi::ENDPOINT,
        }
    }

    /// Response field holding the article array.
    pub fn envelope(&self) -> &'static str {
        match self {
            ProviderKind::GNews => gnews::ENVELOPE,
            ProviderKind::NewsApi => newsapi::ENVELOPE,
            ProviderKind::Mediastack => mediastack::ENVELOPE,
            ProviderKind::TheNewsApi => thenewsapi::ENVELOPE,
        }
    }

    pub fn params(
        &self,
        api_key: &str,
        query: &str,
        limit: usize,
        language: &str,
    ) -> Vec<(&'static str, String)> {
        match self {
            ProviderKind::GNews => gnews::params(api_key, query, limit, language),
            ProviderKind::NewsApi => newsapi::params(api_key, query, limit, language),
            ProviderKind::Mediastack => mediastack::params(api_key, query, limit, language),
            ProviderKind::TheNewsApi => thenewsapi::params(api_key, query, limit, language),
        }
    }

    pub fn normalize(&self, item: Value) -> Result<Article, serde_json::Error> {
        match self {
            ProviderKind::GNews => normalize_as::<gnews::RawArticle>(item),
            ProviderKind::NewsApi => normalize_as::<newsapi::RawArticle>(item),
            ProviderKind::Mediastack => normalize_as::<mediastack::RawArticle>(item),
            ProviderKind::TheNewsApi => normalize_as::<thenewsapi::RawArticle>(item),
        }
    }
}

fn normalize_as<R>(item: Value) -> Result<Article, serde_json::Error>
where
    R: DeserializeOwned + Into<Article>,
{
    serde_json::from_value::<R>(item).map(Into::into)
}

/// Pulls the article list out of a response body.
///
/// The whole fetch fails if the body is not JSON or the envelope field is
/// missing. Individual entries that do not match the provider's shape are
/// skipped.
pub fn decode_articles(
    provider: ProviderKind,
    body: &str,
    envelope: &str,
) -> Result<Vec<Article>, FetchError> {
    let mut value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let items = match value.get_mut(envelope).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => return Err(FetchError::Envelope(envelope.to_string())),
    };

    let mut articles = Vec::with_capacity(items.len());
    for item in items {
        match provider.normalize(item) {
            Ok(article) => articles.push(article),
            Err(e) => warn!(provider = provider.name(), error = %e, "Skipping malformed article"),
        }
    }
    Ok(articles)
}

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::Article;

pub type FetchResult = std::result::Result<Vec<Article>, FetchError>;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Returns the name of the news provider
    fn name(&self) -> &str;

    /// Searches the provider for `query`, returning at most `limit` articles.
    ///
    /// An empty list is a success. Any transport, status or decoding failure
    /// comes back as a [`FetchError`] rather than a panic.
    async fn fetch_articles(&self, query: &str, limit: usize) -> FetchResult;
}

//! In-memory article source for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::source::{ArticleSource, FetchResult};
use crate::types::Article;

/// Serves canned results keyed by query and records every request.
///
/// Unknown queries succeed with no articles.
#[derive(Default)]
pub struct StaticSource {
    responses: HashMap<String, FetchResult>,
    requests: Mutex<Vec<(String, usize)>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, result: FetchResult) -> Self {
        self.responses.insert(query.to_string(), result);
        self
    }

    pub fn requests(&self) -> Vec<(String, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_articles(&self, query: &str, limit: usize) -> FetchResult {
        self.requests.lock().unwrap().push((query.to_string(), limit));
        match self.responses.get(query) {
            Some(Ok(articles)) => Ok(articles.iter().take(limit).cloned().collect()),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(Vec::new()),
        }
    }
}

/// `n` articles titled `"{prefix} story {i}"`.
pub fn sample_articles(prefix: &str, n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| Article {
            title: format!("{prefix} story {i}"),
            description: Some(format!("What happened in {prefix} story {i}.")),
            url: format!("https://news.example.com/{prefix}/{i}"),
            image: (i % 2 == 0).then(|| format!("https://img.example.com/{prefix}/{i}.jpg")),
            published_at: format!("2024-06-{:02}T09:00:00Z", i % 28 + 1),
            source_name: Some("Example Wire".to_string()),
            author: None,
            category: None,
        })
        .collect()
}

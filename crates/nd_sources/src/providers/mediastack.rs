use nd_core::types::non_empty;
use nd_core::Article;
use serde::Deserialize;

pub const ENDPOINT: &str = "http://api.mediastack.com/v1/news";
pub const ENVELOPE: &str = "data";

pub fn params(api_key: &str, query: &str, limit: usize, language: &str) -> Vec<(&'static str, String)> {
    vec![
        ("keywords", query.to_string()),
        ("limit", limit.to_string()),
        ("languages", language.to_string()),
        ("access_key", api_key.to_string()),
    ]
}

#[derive(Debug, Deserialize)]
pub struct RawArticle {
    author: Option<String>,
    #[serde(default)]
    title: String,
    description: Option<String>,
    #[serde(default)]
    url: String,
    source: Option<String>,
    image: Option<String>,
    category: Option<String>,
    #[serde(default)]
    published_at: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article {
            title: raw.title,
            description: non_empty(raw.description),
            url: raw.url,
            image: non_empty(raw.image),
            published_at: raw.published_at,
            source_name: non_empty(raw.source),
            author: non_empty(raw.author),
            category: non_empty(raw.category),
        }
    }
}

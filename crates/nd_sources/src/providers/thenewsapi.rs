use nd_core::types::non_empty;
use nd_core::Article;
use serde::Deserialize;

pub const ENDPOINT: &str = "https://api.thenewsapi.com/v1/news/all";
pub const ENVELOPE: &str = "data";

pub fn params(api_key: &str, query: &str, limit: usize, language: &str) -> Vec<(&'static str, String)> {
    vec![
        ("search", query.to_string()),
        ("limit", limit.to_string()),
        ("language", language.to_string()),
        ("api_token", api_key.to_string()),
    ]
}

#[derive(Debug, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    title: String,
    description: Option<String>,
    snippet: Option<String>,
    #[serde(default)]
    url: String,
    image_url: Option<String>,
    #[serde(default)]
    published_at: String,
    source: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article {
            title: raw.title,
            description: non_empty(raw.description).or_else(|| non_empty(raw.snippet)),
            url: raw.url,
            image: non_empty(raw.image_url),
            published_at: raw.published_at,
            source_name: non_empty(raw.source),
            author: None,
            category: non_empty(raw.categories.into_iter().next()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let raw: RawArticle = serde_json::from_value(serde_json::json!({
            "uuid": "a1b2",
            "title": "Team wins final",
            "description": "",
            "snippet": "A late goal settled it.",
            "url": "https://example.com/final",
            "image_url": "https://example.com/final.jpg",
            "language": "en",
            "published_at": "2024-01-01T12:00:00.000000Z",
            "source": "example.com",
            "categories": ["sports", "general"]
        }))
        .unwrap();
        let article = Article::from(raw);
        assert_eq!(article.description.as_deref(), Some("A late goal settled it."));
        assert_eq!(article.category.as_deref(), Some("sports"));
        assert_eq!(article.source_name.as_deref(), Some("example.com"));
    }
}

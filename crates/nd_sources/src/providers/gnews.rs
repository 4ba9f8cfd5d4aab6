use nd_core::types::non_empty;
use nd_core::Article;
use serde::Deserialize;

pub const ENDPOINT: &str = "https://gnews.io/api/v4/search";
pub const ENVELOPE: &str = "articles";

pub fn params(api_key: &str, query: &str, limit: usize, language: &str) -> Vec<(&'static str, String)> {
    vec![
        ("q", query.to_string()),
        ("max", limit.to_string()),
        ("lang", language.to_string()),
        ("token", api_key.to_string()),
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    title: String,
    description: Option<String>,
    #[serde(default)]
    url: String,
    image: Option<String>,
    #[serde(default)]
    published_at: String,
    source: Option<RawSource>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article {
            title: raw.title,
            description: non_empty(raw.description),
            url: raw.url,
            image: non_empty(raw.image),
            published_at: raw.published_at,
            source_name: non_empty(raw.source.and_then(|s| s.name)),
            author: None,
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let raw: RawArticle = serde_json::from_value(serde_json::json!({
            "title": "Markets rally",
            "description": "Stocks rose.",
            "content": "Full text...",
            "url": "https://example.com/markets",
            "image": "",
            "publishedAt": "2024-02-10T08:00:00Z",
            "source": { "name": "Example News", "url": "https://example.com" }
        }))
        .unwrap();
        let article = Article::from(raw);
        assert_eq!(article.title, "Markets rally");
        assert_eq!(article.image, None);
        assert_eq!(article.source_name.as_deref(), Some("Example News"));
        assert_eq!(article.published_at, "2024-02-10T08:00:00Z");
    }
}

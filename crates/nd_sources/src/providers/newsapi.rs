use nd_core::types::non_empty;
use nd_core::Article;
use serde::Deserialize;

pub const ENDPOINT: &str = "https://newsapi.org/v2/everything";
pub const ENVELOPE: &str = "articles";

pub fn params(api_key: &str, query: &str, limit: usize, language: &str) -> Vec<(&'static str, String)> {
    vec![
        ("q", query.to_string()),
        ("pageSize", limit.to_string()),
        ("language", language.to_string()),
        ("apiKey", api_key.to_string()),
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    source: Option<RawSource>,
    author: Option<String>,
    #[serde(default)]
    title: String,
    description: Option<String>,
    #[serde(default)]
    url: String,
    url_to_image: Option<String>,
    #[serde(default)]
    published_at: String,
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
            image: non_empty(raw.url_to_image),
            published_at: raw.published_at,
            source_name: non_empty(raw.source.and_then(|s| s.name)),
            author: non_empty(raw.author),
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
            "source": { "id": null, "name": "The Verge" },
            "author": "Sam Writer",
            "title": "New chips announced",
            "description": null,
            "url": "https://example.com/chips",
            "urlToImage": "https://example.com/chips.png",
            "publishedAt": "2024-04-01T12:00:00Z",
            "content": null
        }))
        .unwrap();
        let article = Article::from(raw);
        assert_eq!(article.image.as_deref(), Some("https://example.com/chips.png"));
        assert_eq!(article.author.as_deref(), Some("Sam Writer"));
        assert_eq!(article.source_name.as_deref(), Some("The Verge"));
        assert_eq!(article.description, None);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A news article normalized from a provider response.
///
/// Built fresh from every response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image: Option<String>,
    /// Raw timestamp as sent by the provider, formatted at render time.
    pub published_at: String,
    pub source_name: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: url.into(),
            image: None,
            published_at: String::new(),
            source_name: None,
            author: None,
            category: None,
        }
    }

    /// Name shown in the byline: the author, else the source.
    pub fn byline_name(&self) -> Option<&str> {
        self.author.as_deref().or(self.source_name.as_deref())
    }

    /// Label shown above the title: the category, else the source.
    pub fn label(&self) -> Option<&str> {
        self.category.as_deref().or(self.source_name.as_deref())
    }
}

/// Treats empty or blank provider strings as missing.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A navigation target: the homepage or one configured category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Home,
    Named(String),
}

impl Category {
    pub const HOME: &'static str = "home";

    pub fn name(&self) -> &str {
        match self {
            Category::Home => Self::HOME,
            Category::Named(name) => name,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Category::Home)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

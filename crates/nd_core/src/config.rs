use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Category;
use crate::{Error, Result};

/// Layout and query bindings for the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_title: String,
    /// Query issued for the homepage; broader than the `home` label itself.
    pub home_query: String,
    pub page_size: usize,
    pub sidebar_query: String,
    pub sidebar_limit: usize,
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    /// Whether the sidebar carries a widget for this category.
    #[serde(default)]
    pub widget: bool,
}

impl CategoryConfig {
    pub fn new(name: &str, widget: bool) -> Self {
        Self {
            name: name.to_string(),
            label: None,
            query: None,
            widget,
        }
    }

    pub fn label(&self) -> String {
        self.label.clone().unwrap_or_else(|| capitalize(&self.name))
    }

    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or(&self.name)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "The Daily Brief".to_string(),
            home_query: "world".to_string(),
            page_size: 9,
            sidebar_query: "technology".to_string(),
            sidebar_limit: 4,
            categories: vec![
                CategoryConfig::new("world", true),
                CategoryConfig::new("business", true),
                CategoryConfig::new("technology", true),
                CategoryConfig::new("sports", true),
                CategoryConfig::new("entertainment", false),
                CategoryConfig::new("health", false),
                CategoryConfig::new("science", false),
            ],
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be greater than zero".to_string()));
        }
        if self.sidebar_limit == 0 {
            return Err(Error::Config("sidebar_limit must be greater than zero".to_string()));
        }
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(Error::Config("category names must not be empty".to_string()));
            }
            if category.name == Category::HOME {
                return Err(Error::Config("`home` is reserved and cannot be configured".to_string()));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(Error::Config(format!("duplicate category `{}`", category.name)));
            }
        }
        Ok(())
    }

    /// Resolves a nav link identifier against the configured categories.
    pub fn category(&self, name: &str) -> Result<Category> {
        if name == Category::HOME {
            return Ok(Category::Home);
        }
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| Category::Named(c.name.clone()))
            .ok_or_else(|| Error::UnknownCategory(name.to_string()))
    }

    fn lookup(&self, category: &Category) -> Option<&CategoryConfig> {
        match category {
            Category::Home => None,
            Category::Named(name) => self.categories.iter().find(|c| &c.name == name),
        }
    }

    pub fn query_for(&self, category: &Category) -> String {
        match self.lookup(category) {
            Some(config) => config.query().to_string(),
            None if category.is_home() => self.home_query.clone(),
            None => category.name().to_string(),
        }
    }

    pub fn label_for(&self, category: &Category) -> String {
        match self.lookup(category) {
            Some(config) => config.label(),
            None => capitalize(category.name()),
        }
    }

    /// Nav link order: home first, then categories as configured.
    pub fn nav_categories(&self) -> Vec<Category> {
        std::iter::once(Category::Home)
            .chain(self.categories.iter().map(|c| Category::Named(c.name.clone())))
            .collect()
    }

    pub fn widget_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.widget)
            .map(|c| c.name.clone())
            .collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.query_for(&Category::Home), "world");
        assert_eq!(config.query_for(&Category::Named("technology".into())), "technology");
        assert_eq!(config.label_for(&Category::Named("sports".into())), "Sports");
        assert_eq!(config.nav_categories()[0], Category::Home);
    }

    #[test]
    fn test_category_lookup() {
        let config = SiteConfig::default();
        assert_eq!(config.category("home").unwrap(), Category::Home);
        assert_eq!(
            config.category("business").unwrap(),
            Category::Named("business".to_string())
        );
        assert!(matches!(config.category("weather"), Err(Error::UnknownCategory(_))));
    }

    #[test]
    fn test_from_toml() {
        let raw = r#"
            site_title = "Morning Wire"
            home_query = "headlines"
            page_size = 6

            [[categories]]
            name = "tech"
            label = "Tech & Gadgets"
            query = "technology"
            widget = true

            [[categories]]
            name = "markets"
        "#;
        let config = SiteConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.site_title, "Morning Wire");
        assert_eq!(config.page_size, 6);
        assert_eq!(config.sidebar_limit, 4);
        let tech = config.category("tech").unwrap();
        assert_eq!(config.query_for(&tech), "technology");
        assert_eq!(config.label_for(&tech), "Tech & Gadgets");
        assert_eq!(config.widget_names(), vec!["tech".to_string()]);
    }

    #[test]
    fn test_validation_errors() {
        assert!(SiteConfig::from_toml_str("page_size = 0").is_err());
        assert!(SiteConfig::from_toml_str("[[categories]]\nname = \"home\"").is_err());
        let dup = "[[categories]]\nname = \"a\"\n[[categories]]\nname = \"a\"";
        assert!(matches!(SiteConfig::from_toml_str(dup), Err(Error::Config(_))));
        assert!(matches!(SiteConfig::from_toml_str("page_size = \"x\""), Err(Error::ConfigParse(_))));
    }
}

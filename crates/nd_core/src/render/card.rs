use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use maud::html;
use serde::{Deserialize, Serialize};

use super::links::safe_url;
use super::Markup;
use crate::types::Article;

pub const CARD_PLACEHOLDER: &str = "https://via.placeholder.com/400x220?text=No+Image";
pub const SIDEBAR_PLACEHOLDER: &str = "https://via.placeholder.com/80";
pub const UNKNOWN_SOURCE: &str = "Unknown Source";
pub const INVALID_DATE: &str = "Invalid Date";

/// Which article fields a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Hero,
    Secondary,
    List,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Hero => "hero",
            Variant::Secondary => "secondary",
            Variant::List => "list",
        }
    }
}

/// Formats a provider timestamp as an en-US short date (`M/D/YYYY`, UTC).
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

pub fn render_card(article: &Article, variant: Variant) -> Markup {
    let href = safe_url(Some(article.url.as_str()), "#");
    let date = format_date(&article.published_at);
    let with_byline = matches!(variant, Variant::Hero | Variant::List);

    Markup::from(html! {
        article.article-card data-variant=(variant.as_str()) {
            img src=(safe_url(article.image.as_deref(), CARD_PLACEHOLDER)) alt=(article.title);
            div.article-content {
                span.article-category { (article.label().unwrap_or(UNKNOWN_SOURCE)) }
                h3 {
                    a href=(href) target="_blank" rel="noopener noreferrer" { (article.title) }
                }
                @if with_byline {
                    span.article-meta {
                        "By " (article.byline_name().unwrap_or(UNKNOWN_SOURCE)) " / " (date)
                    }
                    @if let Some(description) = &article.description {
                        p.article-excerpt { (description) }
                    }
                } @else {
                    span.article-meta { (date) }
                }
            }
        }
    })
}

/// Compact sidebar entry: image and linked title only.
pub fn render_widget_post(article: &Article) -> Markup {
    Markup::from(html! {
        div.widget-post {
            img src=(safe_url(article.image.as_deref(), SIDEBAR_PLACEHOLDER)) alt="Story image";
            div {
                h4 {
                    a href=(safe_url(Some(article.url.as_str()), "#")) target="_blank" rel="noopener noreferrer" {
                        (article.title)
                    }
                }
            }
        }
    })
}

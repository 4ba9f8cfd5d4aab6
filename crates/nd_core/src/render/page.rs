use maud::html;

use super::card::{render_card, render_widget_post, Variant};
use super::Markup;
use crate::types::Article;

pub const HOMEPAGE_MIN_ARTICLES: usize = 3;
pub const SIDEBAR_MAX_POSTS: usize = 4;

pub const FETCH_ERROR_MESSAGE: &str = "Could not fetch news. This is often due to an invalid API key or exceeding the daily request limit.";
pub const NOT_ENOUGH_ARTICLES_MESSAGE: &str = "Not enough articles to display the homepage. The API may be having issues or the query returned no results.";
pub const NO_ARTICLES_MESSAGE: &str = "No articles found for this category.";
pub const SIDEBAR_UNAVAILABLE_MESSAGE: &str = "Could not load stories.";

/// Hero grid: the first article as hero, the next two as secondary cards.
///
/// `None` is the failed-fetch sentinel and renders like an empty list.
pub fn render_homepage(articles: Option<&[Article]>) -> Markup {
    let articles = match articles {
        Some(a) if a.len() >= HOMEPAGE_MIN_ARTICLES => a,
        _ => return Markup::from(html! { div.error-message { (NOT_ENOUGH_ARTICLES_MESSAGE) } }),
    };

    Markup::from(html! {
        div.hero-grid {
            div.hero-main { (render_card(&articles[0], Variant::Hero)) }
            @for article in &articles[1..HOMEPAGE_MIN_ARTICLES] {
                div.hero-secondary { (render_card(article, Variant::Secondary)) }
            }
        }
    })
}

pub fn render_category_page(articles: Option<&[Article]>, category_name: &str) -> Markup {
    Markup::from(html! {
        h2.page-heading { (category_name) " News" }
        @match articles {
            Some(a) if !a.is_empty() => {
                div.article-list {
                    @for article in a {
                        (render_card(article, Variant::List))
                    }
                }
            },
            _ => p { (NO_ARTICLES_MESSAGE) },
        }
    })
}

pub fn render_sidebar(articles: Option<&[Article]>) -> Markup {
    Markup::from(html! {
        @match articles {
            Some(a) if !a.is_empty() => {
                @for article in a.iter().take(SIDEBAR_MAX_POSTS) {
                    (render_widget_post(article))
                }
            },
            _ => p { (SIDEBAR_UNAVAILABLE_MESSAGE) },
        }
    })
}

pub fn render_loading() -> Markup {
    Markup::from(html! { div.loader {} })
}

pub fn render_fetch_error() -> Markup {
    Markup::from(html! { div.error-message { (FETCH_ERROR_MESSAGE) } })
}

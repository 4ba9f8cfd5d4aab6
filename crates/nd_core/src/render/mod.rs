//! HTML rendering for articles and page regions.
//!
//! Everything here is pure: the same input always produces the same markup.
//! Templates are `maud::html!`, so interpolated article text is escaped, and
//! only http(s) URLs reach `href`/`src`.

use serde::Serialize;
use std::fmt;

pub mod card;
pub mod links;
pub mod page;

pub use card::{format_date, render_card, Variant};
pub use links::safe_url;
pub use page::{
    render_category_page, render_fetch_error, render_homepage, render_loading, render_sidebar,
};

/// A rendered HTML fragment, kept as a string so documents can be
/// compared and serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<maud::Markup> for Markup {
    fn from(html: maud::Markup) -> Self {
        Self(html.into_string())
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl maud::Render for Markup {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use maud::{html, Markup, DOCTYPE};
use nd_core::document::Document;
use url::form_urlencoded;

const WIDGET_SHOWN: &str = "display: block";
const WIDGET_HIDDEN: &str = "display: none";

/// Link target for a category, with the name percent-encoded as one path segment.
pub fn nav_href(category: &str) -> String {
    // byte_serialize writes a literal '+' as %2B, so any '+' left is a space
    let segment = form_urlencoded::byte_serialize(category.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("/nav/{segment}")
}

/// Full HTML page around the document's regions.
pub fn render_page(site_title: &str, doc: &Document) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (site_title) }
            }
            body {
                header.site-header {
                    span id="current-date" { (doc.date_line) }
                    h1.site-title { a href="/title" { (site_title) } }
                    nav.main-nav {
                        @for link in &doc.nav_links {
                            a href=(nav_href(link.category.name()))
                                data-category=(link.category.name())
                                class=[link.active.then_some("active")] { (link.label) }
                        }
                    }
                }
                div.layout {
                    main.main-content { (doc.main_content) }
                    aside.sidebar {
                        div.widget {
                            h3.widget-title { "Top Stories" }
                            div.widget-post-list { (doc.sidebar_list) }
                        }
                        @for widget in &doc.widgets {
                            div.widget.category-widget
                                id=(format!("widget-{}", widget.category))
                                style=(if widget.visible { WIDGET_SHOWN } else { WIDGET_HIDDEN }) {
                                h3.widget-title { (widget.label) }
                                a href=(nav_href(&widget.category)) { "More " (widget.label) " news" }
                            }
                        }
                    }
                }
            }
        }
    }
}

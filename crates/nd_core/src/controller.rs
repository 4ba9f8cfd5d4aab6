use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::config::SiteConfig;
use crate::document::Document;
use crate::render::{
    render_category_page, render_fetch_error, render_homepage, render_loading, render_sidebar,
    Markup,
};
use crate::source::{ArticleSource, FetchResult};
use crate::state::{LoadState, Target, TargetState, UiState, View};
use crate::types::Category;
use crate::Result;

/// A fetch that has been issued for a render target but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub target: Target,
    pub request: u64,
    pub query: String,
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Applied,
    /// A newer request for the same target was issued before this one resolved.
    Superseded,
}

struct Page {
    ui: UiState,
    document: Document,
}

impl Page {
    fn paint(&mut self, target: Target) {
        let markup = render_target(self.ui.target(target));
        self.document.replace(target, markup);
    }
}

/// Renders a target from its load state.
pub fn render_target(state: &TargetState) -> Markup {
    match (&state.view, &state.load) {
        (_, LoadState::Idle) => Markup::default(),
        (_, LoadState::Loading) => render_loading(),
        (View::Sidebar, LoadState::Failed(_)) => render_sidebar(None),
        (_, LoadState::Failed(_)) => render_fetch_error(),
        (View::Homepage, LoadState::Loaded(articles)) => render_homepage(Some(articles.as_slice())),
        (View::CategoryPage { label, .. }, LoadState::Loaded(articles)) => {
            render_category_page(Some(articles.as_slice()), label)
        }
        (View::Sidebar, LoadState::Loaded(articles)) => render_sidebar(Some(articles.as_slice())),
    }
}

/// Owns the UI state and document, and turns clicks into fetches and renders.
///
/// The state lock is never held across a fetch, so clicks stay responsive and
/// overlapping fetches are allowed. Only the response to the latest request
/// for a target is rendered into it.
pub struct NavigationController {
    source: Arc<dyn ArticleSource>,
    config: Arc<SiteConfig>,
    page: Mutex<Page>,
}

impl NavigationController {
    pub fn new(source: Arc<dyn ArticleSource>, config: SiteConfig) -> Self {
        let ui = UiState::new(&config.widget_names());
        let mut document = Document::new(&config);
        document.set_widget_visibility(ui.navigation.visible_widgets());
        Self {
            source,
            config: Arc::new(config),
            page: Mutex::new(Page { ui, document }),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Document {
        self.page().document.clone()
    }

    pub fn ui_state(&self) -> UiState {
        self.page().ui.clone()
    }

    pub fn set_date_line(&self, date: NaiveDate) {
        self.page().document.date_line = date.format("%B %-d, %Y").to_string();
    }

    /// Shows every widget without touching the active link.
    pub fn show_home_widgets(&self) {
        let visible = crate::state::visible_widgets_for(&Category::Home, &self.config.widget_names());
        self.page().document.set_widget_visibility(&visible);
    }

    /// Applies the synchronous half of a click: active link, widgets, loader.
    pub fn begin_navigation(&self, category: Category) -> PendingFetch {
        let query = self.config.query_for(&category);
        let view = match &category {
            Category::Home => View::Homepage,
            Category::Named(name) => View::CategoryPage {
                category: name.clone(),
                label: self.config.label_for(&category),
            },
        };

        let mut page = self.page();
        page.ui
            .navigation
            .activate(category.clone(), &self.config.widget_names());
        let visible = page.ui.navigation.visible_widgets().clone();
        page.document.set_active_link(&category);
        page.document.set_widget_visibility(&visible);
        let request = page.ui.main_content.issue(view);
        page.paint(Target::MainContent);

        debug!(%category, request, %query, "Navigation issued");
        PendingFetch {
            target: Target::MainContent,
            request,
            query,
            limit: self.config.page_size,
        }
    }

    pub fn begin_sidebar_refresh(&self) -> PendingFetch {
        let mut page = self.page();
        let request = page.ui.sidebar.issue(View::Sidebar);
        page.paint(Target::Sidebar);
        PendingFetch {
            target: Target::Sidebar,
            request,
            query: self.config.sidebar_query.clone(),
            limit: self.config.sidebar_limit,
        }
    }

    /// Runs the fetch for `pending` and renders the result if still current.
    #[instrument(level = "debug", skip(self, pending), fields(target = ?pending.target, query = %pending.query, request = pending.request))]
    pub async fn complete(&self, pending: PendingFetch) -> RenderOutcome {
        let result = self
            .source
            .fetch_articles(&pending.query, pending.limit)
            .await;
        self.apply(&pending, result)
    }

    /// Renders a fetch result into its target unless a newer request exists.
    pub fn apply(&self, pending: &PendingFetch, result: FetchResult) -> RenderOutcome {
        let mut page = self.page();
        let state = page.ui.target_mut(pending.target);
        if !state.is_current(pending.request) {
            debug!(
                request = pending.request,
                latest = state.latest_request,
                "Discarding superseded response"
            );
            return RenderOutcome::Superseded;
        }

        state.load = match result {
            Ok(articles) => {
                debug!(count = articles.len(), "Articles loaded");
                LoadState::Loaded(articles)
            }
            Err(e) => {
                warn!(error = %e, query = %pending.query, "Error fetching news");
                LoadState::Failed(e)
            }
        };
        page.paint(pending.target);
        RenderOutcome::Applied
    }

    pub async fn navigate(&self, category: Category) -> RenderOutcome {
        info!("🧭 Navigating to {}", category);
        let pending = self.begin_navigation(category);
        self.complete(pending).await
    }

    /// Handles a click on a nav link carrying `category`.
    pub async fn click_nav_link(&self, category: &str) -> Result<RenderOutcome> {
        let category = self.config.category(category)?;
        Ok(self.navigate(category).await)
    }

    /// The site title always leads home.
    pub async fn click_site_title(&self) -> RenderOutcome {
        self.navigate(Category::Home).await
    }

    pub async fn refresh_sidebar(&self) -> RenderOutcome {
        let pending = self.begin_sidebar_refresh();
        self.complete(pending).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::render::page::{
        FETCH_ERROR_MESSAGE, NOT_ENOUGH_ARTICLES_MESSAGE, NO_ARTICLES_MESSAGE,
    };
    use crate::test_utils::{sample_articles, StaticSource};
    use crate::Error;

    fn controller(source: StaticSource) -> (Arc<StaticSource>, NavigationController) {
        let source = Arc::new(source);
        let controller = NavigationController::new(source.clone(), SiteConfig::default());
        (source, controller)
    }

    fn assert_nav_invariant(doc: &Document, active: &str) {
        let links: Vec<_> = doc.active_links().collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].category.name(), active);

        let visible: Vec<_> = doc.visible_widgets().map(|w| w.category.as_str()).collect();
        if active == "home" {
            assert_eq!(visible.len(), doc.widgets.len());
        } else if doc.widgets.iter().any(|w| w.category == active) {
            assert_eq!(visible, vec![active]);
        } else {
            assert!(visible.is_empty());
        }
    }

    fn count(doc: &Document, needle: &str) -> usize {
        doc.main_content.as_str().matches(needle).count()
    }

    #[tokio::test]
    async fn test_click_category() {
        let (source, controller) = controller(
            StaticSource::new().with("technology", Ok(sample_articles("tech", 5))),
        );

        let outcome = controller.click_nav_link("technology").await.unwrap();
        assert_eq!(outcome, RenderOutcome::Applied);

        let doc = controller.snapshot();
        assert_nav_invariant(&doc, "technology");
        assert!(doc.main_content.as_str().contains("Technology News"));
        assert_eq!(count(&doc, "data-variant=\"list\""), 5);
        assert_eq!(source.requests(), vec![("technology".to_string(), 9)]);
    }

    #[tokio::test]
    async fn test_category_without_widget_hides_all() {
        let (_, controller) = controller(StaticSource::new());
        controller.click_nav_link("health").await.unwrap();

        let doc = controller.snapshot();
        assert_nav_invariant(&doc, "health");
        assert_eq!(doc.visible_widgets().count(), 0);
        assert!(doc.main_content.as_str().contains(NO_ARTICLES_MESSAGE));
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let (source, controller) = controller(StaticSource::new());
        let before = controller.snapshot();

        let result = controller.click_nav_link("weather").await;
        assert!(matches!(result, Err(Error::UnknownCategory(name)) if name == "weather"));
        assert_eq!(controller.snapshot(), before);
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_home_uses_home_query() {
        let (source, controller) =
            controller(StaticSource::new().with("world", Ok(sample_articles("world", 9))));

        controller.click_nav_link("home").await.unwrap();

        let doc = controller.snapshot();
        assert_nav_invariant(&doc, "home");
        assert_eq!(count(&doc, "data-variant=\"hero\""), 1);
        assert_eq!(count(&doc, "data-variant=\"secondary\""), 2);
        assert!(doc.main_content.as_str().contains("world story 0"));
        assert!(!doc.main_content.as_str().contains("world story 3"));
        assert_eq!(source.requests(), vec![("world".to_string(), 9)]);
    }

    #[tokio::test]
    async fn test_site_title_returns_home() {
        let (_, controller) = controller(
            StaticSource::new()
                .with("world", Ok(sample_articles("world", 3)))
                .with("sports", Ok(sample_articles("sports", 2))),
        );

        controller.click_nav_link("sports").await.unwrap();
        assert_nav_invariant(&controller.snapshot(), "sports");

        controller.click_site_title().await;
        let doc = controller.snapshot();
        assert_nav_invariant(&doc, "home");
        assert_eq!(count(&doc, "data-variant=\"hero\""), 1);
    }

    #[tokio::test]
    async fn test_short_homepage_is_insufficient_not_error() {
        let (_, controller) =
            controller(StaticSource::new().with("world", Ok(sample_articles("world", 2))));

        controller.click_site_title().await;
        let doc = controller.snapshot();
        assert!(doc.main_content.as_str().contains(NOT_ENOUGH_ARTICLES_MESSAGE));
        assert!(!doc.main_content.as_str().contains(FETCH_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_error_message() {
        let unauthorized = FetchError::Status {
            code: 401,
            reason: "Unauthorized".to_string(),
        };
        let (_, controller) = controller(
            StaticSource::new()
                .with("world", Err(unauthorized.clone()))
                .with("business", Err(unauthorized)),
        );

        controller.click_site_title().await;
        assert!(controller
            .snapshot()
            .main_content
            .as_str()
            .contains(FETCH_ERROR_MESSAGE));

        controller.click_nav_link("business").await.unwrap();
        assert!(controller
            .snapshot()
            .main_content
            .as_str()
            .contains(FETCH_ERROR_MESSAGE));
        assert!(matches!(
            controller.ui_state().main_content.load,
            LoadState::Failed(FetchError::Status { code: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_loader_shown_while_pending() {
        let (_, controller) = controller(StaticSource::new());
        let pending = controller.begin_navigation(Category::Home);

        let doc = controller.snapshot();
        assert_eq!(doc.main_content, render_loading());
        assert_eq!(controller.ui_state().main_content.load, LoadState::Loading);

        controller.complete(pending).await;
        assert_ne!(controller.snapshot().main_content, render_loading());
    }

    #[tokio::test]
    async fn test_latest_click_wins_when_it_resolves_first() {
        let (_, controller) = controller(
            StaticSource::new()
                .with("world", Ok(sample_articles("world", 9)))
                .with("technology", Ok(sample_articles("tech", 4))),
        );

        let home = controller.begin_navigation(Category::Home);
        let tech = controller.begin_navigation(Category::Named("technology".into()));

        assert_eq!(controller.complete(tech).await, RenderOutcome::Applied);
        assert_eq!(controller.complete(home).await, RenderOutcome::Superseded);

        let doc = controller.snapshot();
        assert_nav_invariant(&doc, "technology");
        assert!(doc.main_content.as_str().contains("Technology News"));
        assert!(!doc.main_content.as_str().contains("world story"));
    }

    #[tokio::test]
    async fn test_latest_click_wins_when_it_resolves_last() {
        let (_, controller) = controller(
            StaticSource::new()
                .with("world", Ok(sample_articles("world", 9)))
                .with("technology", Ok(sample_articles("tech", 4))),
        );

        let home = controller.begin_navigation(Category::Home);
        let tech = controller.begin_navigation(Category::Named("technology".into()));

        assert_eq!(controller.complete(home).await, RenderOutcome::Superseded);
        assert_eq!(controller.snapshot().main_content, render_loading());
        assert_eq!(controller.complete(tech).await, RenderOutcome::Applied);
        assert!(controller
            .snapshot()
            .main_content
            .as_str()
            .contains("Technology News"));
    }

    #[tokio::test]
    async fn test_sidebar_is_independent_of_main() {
        let (_, controller) = controller(
            StaticSource::new()
                .with("technology", Err(FetchError::Transport("connection reset".into())))
                .with("world", Ok(sample_articles("world", 3))),
        );

        controller.click_site_title().await;
        let main_before = controller.snapshot().main_content;
        controller.refresh_sidebar().await;

        let doc = controller.snapshot();
        assert_eq!(doc.main_content, main_before);
        assert_eq!(doc.sidebar_list.as_str(), "<p>Could not load stories.</p>");
    }

    #[test]
    fn test_date_line_format() {
        let (_, controller) = controller(StaticSource::new());
        controller.set_date_line(NaiveDate::from_ymd_opt(2026, 10, 8).unwrap());
        assert_eq!(controller.snapshot().date_line, "October 8, 2026");
    }
}

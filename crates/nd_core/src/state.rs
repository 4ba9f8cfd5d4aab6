use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::FetchError;
use crate::types::{Article, Category};

/// Active nav link and the sidebar widgets it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    active_category: Category,
    visible_widgets: BTreeSet<String>,
}

impl NavigationState {
    /// Starts on `home` with every widget shown.
    pub fn new(widgets: &[String]) -> Self {
        let mut state = Self {
            active_category: Category::Home,
            visible_widgets: BTreeSet::new(),
        };
        state.activate(Category::Home, widgets);
        state
    }

    pub fn active_category(&self) -> &Category {
        &self.active_category
    }

    pub fn visible_widgets(&self) -> &BTreeSet<String> {
        &self.visible_widgets
    }

    pub fn activate(&mut self, category: Category, widgets: &[String]) {
        self.visible_widgets = visible_widgets_for(&category, widgets);
        self.active_category = category;
    }
}

/// All widgets on `home`, otherwise only the category's own widget if it has one.
pub fn visible_widgets_for(category: &Category, widgets: &[String]) -> BTreeSet<String> {
    match category {
        Category::Home => widgets.iter().cloned().collect(),
        Category::Named(name) => widgets.iter().filter(|w| *w == name).cloned().collect(),
    }
}

/// What a render target was last asked to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum View {
    Homepage,
    CategoryPage { category: String, label: String },
    Sidebar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Article>),
    Failed(#[serde(serialize_with = "serialize_display")] FetchError),
}

fn serialize_display<S: serde::Serializer>(
    error: &FetchError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// The render regions that receive fetched content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    MainContent,
    Sidebar,
}

/// Load state of one render target plus its request sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetState {
    pub view: View,
    pub load: LoadState,
    /// Sequence number of the latest request issued for this target.
    pub latest_request: u64,
}

impl TargetState {
    fn new(view: View) -> Self {
        Self {
            view,
            load: LoadState::Idle,
            latest_request: 0,
        }
    }

    /// Starts a new request, superseding any still in flight.
    pub fn issue(&mut self, view: View) -> u64 {
        self.latest_request += 1;
        self.view = view;
        self.load = LoadState::Loading;
        self.latest_request
    }

    pub fn is_current(&self, request: u64) -> bool {
        request == self.latest_request
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiState {
    pub navigation: NavigationState,
    pub main_content: TargetState,
    pub sidebar: TargetState,
}

impl UiState {
    pub fn new(widgets: &[String]) -> Self {
        Self {
            navigation: NavigationState::new(widgets),
            main_content: TargetState::new(View::Homepage),
            sidebar: TargetState::new(View::Sidebar),
        }
    }

    pub fn target(&self, target: Target) -> &TargetState {
        match target {
            Target::MainContent => &self.main_content,
            Target::Sidebar => &self.sidebar,
        }
    }

    pub fn target_mut(&mut self, target: Target) -> &mut TargetState {
        match target {
            Target::MainContent => &mut self.main_content,
            Target::Sidebar => &mut self.sidebar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widgets() -> Vec<String> {
        vec!["world".to_string(), "technology".to_string()]
    }

    #[test]
    fn test_initial_state_is_home() {
        let state = NavigationState::new(&widgets());
        assert_eq!(state.active_category(), &Category::Home);
        assert_eq!(state.visible_widgets().len(), 2);
    }

    #[test]
    fn test_widget_visibility_follows_category() {
        let mut state = NavigationState::new(&widgets());

        state.activate(Category::Named("technology".into()), &widgets());
        assert_eq!(
            state.visible_widgets().iter().collect::<Vec<_>>(),
            vec!["technology"]
        );

        state.activate(Category::Named("health".into()), &widgets());
        assert!(state.visible_widgets().is_empty());

        state.activate(Category::Home, &widgets());
        assert_eq!(state.visible_widgets().len(), 2);
    }

    #[test]
    fn test_request_sequence_supersedes() {
        let mut target = TargetState::new(View::Homepage);
        let first = target.issue(View::Homepage);
        let second = target.issue(View::Sidebar);
        assert!(second > first);
        assert!(!target.is_current(first));
        assert!(target.is_current(second));
        assert_eq!(target.load, LoadState::Loading);
        assert_eq!(target.view, View::Sidebar);
    }

    #[test]
    fn test_load_state_serializes_errors_as_text() {
        let failed = LoadState::Failed(FetchError::Status {
            code: 401,
            reason: "Unauthorized".to_string(),
        });
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["detail"], "API error: 401 Unauthorized");
    }
}

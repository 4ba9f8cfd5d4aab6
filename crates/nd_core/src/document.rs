use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::render::Markup;
use crate::state::Target;
use crate::types::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub category: Category,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    pub category: String,
    pub label: String,
    pub visible: bool,
}

/// The page's addressable render regions.
///
/// Regions are only ever replaced wholesale or have a display flag toggled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub date_line: String,
    pub main_content: Markup,
    pub sidebar_list: Markup,
    pub nav_links: Vec<NavLink>,
    pub widgets: Vec<Widget>,
}

impl Document {
    pub fn new(config: &SiteConfig) -> Self {
        let nav_links = config
            .nav_categories()
            .into_iter()
            .map(|category| NavLink {
                label: config.label_for(&category),
                active: category.is_home(),
                category,
            })
            .collect();
        let widgets = config
            .categories
            .iter()
            .filter(|c| c.widget)
            .map(|c| Widget {
                category: c.name.clone(),
                label: c.label(),
                visible: false,
            })
            .collect();
        Self {
            date_line: String::new(),
            main_content: Markup::default(),
            sidebar_list: Markup::default(),
            nav_links,
            widgets,
        }
    }

    pub fn replace(&mut self, target: Target, markup: Markup) {
        match target {
            Target::MainContent => self.main_content = markup,
            Target::Sidebar => self.sidebar_list = markup,
        }
    }

    /// Marks the link for `category` as the only active one.
    ///
    /// Links that do not exist leave every link inactive.
    pub fn set_active_link(&mut self, category: &Category) {
        for link in &mut self.nav_links {
            link.active = &link.category == category;
        }
    }

    pub fn set_widget_visibility(&mut self, visible: &BTreeSet<String>) {
        for widget in &mut self.widgets {
            widget.visible = visible.contains(&widget.category);
        }
    }

    pub fn active_links(&self) -> impl Iterator<Item = &NavLink> {
        self.nav_links.iter().filter(|l| l.active)
    }

    pub fn visible_widgets(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter().filter(|w| w.visible)
    }
}

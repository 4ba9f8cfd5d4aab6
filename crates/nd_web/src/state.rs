use std::sync::Arc;

use nd_core::NavigationController;

pub struct AppState {
    pub controller: Arc<NavigationController>,
}

impl AppState {
    pub fn new(controller: Arc<NavigationController>) -> Self {
        Self { controller }
    }
}

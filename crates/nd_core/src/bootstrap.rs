use chrono::Local;
use tracing::info;

use crate::controller::{NavigationController, RenderOutcome};
use crate::types::Category;

/// Initial page load: date line, home widgets, sidebar and homepage.
///
/// The sidebar and homepage fetches run concurrently and neither waits on
/// the other's result.
pub async fn bootstrap(controller: &NavigationController) -> (RenderOutcome, RenderOutcome) {
    info!("🗞️ Loading front page from {}", controller.source_name());
    controller.set_date_line(Local::now().date_naive());
    controller.show_home_widgets();
    futures::join!(
        controller.refresh_sidebar(),
        controller.navigate(Category::Home)
    )
}

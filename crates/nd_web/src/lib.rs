use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod layout;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new().layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(handlers::index))
        .route("/nav/:category", get(handlers::click_nav_link))
        .route("/title", get(handlers::click_site_title))
        .route("/api/document", get(handlers::get_document))
        .route("/api/nav/:category", post(handlers::navigate))
        .layer(middleware)
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves the reader until the process stops.
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Serving on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}

pub mod prelude {
    pub use crate::AppState;
    pub use nd_core::{Document, Error, NavigationController, Result};
}

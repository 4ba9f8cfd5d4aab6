use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use maud::Markup;
use nd_core::{Document, Error};
use tracing::warn;

use crate::layout::render_page;
use crate::AppState;

/// Maps controller errors onto HTTP responses.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::UnknownCategory(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(error = %self.0, %status, "Request failed");
        (status, self.0.to_string()).into_response()
    }
}

fn page(state: &AppState) -> Markup {
    let controller = &state.controller;
    render_page(&controller.config().site_title, &controller.snapshot())
}

pub async fn index(State(state): State<Arc<AppState>>) -> Markup {
    page(&state)
}

pub async fn click_nav_link(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Markup, ApiError> {
    state.controller.click_nav_link(&category).await?;
    Ok(page(&state))
}

pub async fn click_site_title(State(state): State<Arc<AppState>>) -> Markup {
    state.controller.click_site_title().await;
    page(&state)
}

pub async fn get_document(State(state): State<Arc<AppState>>) -> Json<Document> {
    Json(state.controller.snapshot())
}

pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<Document>, ApiError> {
    state.controller.click_nav_link(&category).await?;
    Ok(Json(state.controller.snapshot()))
}

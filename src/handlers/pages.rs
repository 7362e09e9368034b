//! Server-rendered root page and the favicon route.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Html};
use std::io::ErrorKind;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Render the fixed landing page. Does not touch the database.
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String),
        (status = 404, description = "Template missing")
    )
)]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.settings.templates_dir.join(INDEX_TEMPLATE);
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(AppError::NotFound(format!("template {}", INDEX_TEMPLATE)))
        }
        Err(e) => Err(e.into()),
    }
}

/// Returns 200 with an empty body, not the icon file.
///
/// Kept as observed: browsers get no icon even when `static/favicon.ico`
/// exists, which is most likely a bug.
#[utoipa::path(
    get,
    path = "/favicon.ico",
    tag = "pages",
    responses((status = 200, description = "Empty body"))
)]
pub async fn favicon() -> StatusCode {
    StatusCode::OK
}

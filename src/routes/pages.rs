//! Root page, favicon and the static directory.

use crate::handlers::{favicon, index};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/favicon.ico", get(favicon))
        .with_state(state)
}

/// Files under `dir` served verbatim at `/static/*`; unknown paths are 404.
pub fn static_routes(dir: impl AsRef<Path>) -> Router {
    Router::new().nest_service("/static", ServeDir::new(dir))
}

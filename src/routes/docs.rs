//! Machine-readable API description.

use crate::openapi::openapi_json;
use axum::{routing::get, Router};

pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

//! User portal: read-only users JSON API and a server-rendered landing page.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Backend, Settings};
pub use error::{AppError, ConfigError};
pub use model::{User, UserPublic};
pub use routes::{docs_routes, page_routes, static_routes, user_routes};
pub use service::UserService;
pub use state::AppState;
pub use store::{connect, ensure_users_table};

use axum::Router;
use tower_http::trace::TraceLayer;

/// The complete application router.
pub fn app(state: AppState) -> Router {
    let static_dir = state.settings.static_dir.clone();
    Router::new()
        .merge(page_routes(state.clone()))
        .nest("/api", user_routes(state))
        .merge(static_routes(static_dir))
        .merge(docs_routes())
        .layer(TraceLayer::new_for_http())
}

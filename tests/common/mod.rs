use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use sqlx::AnyPool;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;
use user_portal::{app, connect, ensure_users_table, AppState, Settings};

pub struct TestApp {
    pub router: Router,
    pub pool: AnyPool,
    // Keeps the database file alive for the test's duration.
    _dir: TempDir,
}

pub fn sqlite_url(dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", dir.join("users.db").display())
}

pub fn settings_for(url: String) -> Settings {
    Settings::new(url)
        .unwrap()
        .with_asset_root(env!("CARGO_MANIFEST_DIR"))
}

/// App over a fresh SQLite file with the `users` table created.
pub async fn sqlite_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(sqlite_url(dir.path()));
    let pool = connect(&settings).unwrap();
    ensure_users_table(&pool, settings.backend).await.unwrap();
    TestApp {
        router: app(AppState::new(pool.clone(), settings)),
        pool,
        _dir: dir,
    }
}

/// App whose database cannot be opened: the parent directory does not exist.
pub fn unreachable_app() -> Router {
    let settings = settings_for("sqlite:///nonexistent-user-portal-dir/nested/users.db".into());
    let pool = connect(&settings).unwrap();
    app(AppState::new(pool, settings))
}

pub async fn insert_user(pool: &AnyPool, id: i64, name: &str, password: &str) {
    sqlx::query(&format!(
        "INSERT INTO users (id, name, password) VALUES ({id}, '{name}', '{password}')"
    ))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

//! Server entry point: settings from the environment, table bootstrap, then serve.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use user_portal::{app, connect, ensure_users_table, AppState, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("user_portal=info,tower_http=info")),
        )
        .init();

    let pool = connect(&settings)?;
    ensure_users_table(&pool, settings.backend).await?;

    let bind_addr = settings.bind_addr;
    let state = AppState::new(pool, settings);
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

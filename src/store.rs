//! Connection pool and `users` table DDL. The table is created at startup if absent; there are no migrations.

use crate::config::{Backend, Settings};
use crate::error::AppError;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;

pub const USERS_TABLE: &str = "users";

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the process-wide pool. No connection is opened until the first acquire.
pub fn connect(settings: &Settings) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

fn users_ddl(backend: Backend) -> String {
    // Postgres needs SERIAL for server-assigned ids; SQLite's INTEGER PRIMARY KEY aliases rowid.
    let id_type = match backend {
        Backend::Postgres => "SERIAL",
        Backend::Sqlite => "INTEGER",
    };
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {USERS_TABLE} (
            id {id_type} NOT NULL PRIMARY KEY,
            name VARCHAR,
            password VARCHAR
        )
        "#
    )
}

/// Create `users` and its indexes if they do not exist. Existing tables are left as they are.
pub async fn ensure_users_table(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    sqlx::query(&users_ddl(backend)).execute(pool).await?;
    for column in ["id", "name"] {
        let ddl = format!("CREATE INDEX IF NOT EXISTS ix_{USERS_TABLE}_{column} ON {USERS_TABLE} ({column})");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!(table = USERS_TABLE, ?backend, "table ready");
    Ok(())
}

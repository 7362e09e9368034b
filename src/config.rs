//! Process settings. Only the database URL comes from the environment; the rest are defaults.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8000);

/// Database engine selected by the connection string scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split(':').next().unwrap_or("").to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(ConfigError::UnsupportedDatabase(scheme)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub backend: Backend,
    pub bind_addr: SocketAddr,
    /// Served verbatim under `/static`.
    pub static_dir: PathBuf,
    /// Holds `index.html` for the root page.
    pub templates_dir: PathBuf,
}

impl Settings {
    /// Settings for `database_url` with default bind address and asset directories.
    pub fn new(database_url: impl Into<String>) -> Result<Self, ConfigError> {
        let database_url = database_url.into();
        if database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        let backend = Backend::from_url(&database_url)?;
        Ok(Self {
            database_url,
            backend,
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            static_dir: PathBuf::from("static"),
            templates_dir: PathBuf::from("templates"),
        })
    }

    /// Loads `.env` if present, then reads `DATABASE_URL`. Called once at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let url = std::env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingDatabaseUrl)?;
        Self::new(url)
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        self.static_dir = root.join("static");
        self.templates_dir = root.join("templates");
        self
    }
}

//! Shared application state for all routes. Built once at startup.

use crate::config::Settings;
use sqlx::AnyPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: AnyPool, settings: Settings) -> Self {
        Self {
            pool,
            settings: Arc::new(settings),
        }
    }
}

//! Request-scoped database session.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyConnection};
use std::ops::{Deref, DerefMut};

/// One pooled connection, held for the lifetime of a single request.
///
/// Acquired before the handler body runs. Dropping the value hands the
/// connection back to the pool, so it is released on every exit path of the
/// handler, including error returns and unwinding.
pub struct DbSession(PoolConnection<Any>);

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        match state.pool.acquire().await {
            Ok(conn) => {
                tracing::debug!(path = %parts.uri.path(), "database session acquired");
                Ok(DbSession(conn))
            }
            Err(e) => {
                tracing::error!(path = %parts.uri.path(), error = %e, "database session unavailable");
                Err(AppError::Db(e))
            }
        }
    }
}

impl Deref for DbSession {
    type Target = AnyConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::debug!("database session released");
    }
}

//! Users JSON API.

use crate::error::AppError;
use crate::extractors::DbSession;
use crate::model::UserPublic;
use crate::service::UserService;
use axum::Json;

/// List every user as `{id, name}`. An empty table yields `[]`.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, password excluded", body = [UserPublic]),
        (status = 500, description = "Database unavailable or query failed")
    )
)]
pub async fn list_users(mut session: DbSession) -> Result<Json<Vec<UserPublic>>, AppError> {
    let users = UserService::list_all(&mut session).await?;
    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users.into_iter().map(UserPublic::from).collect()))
}

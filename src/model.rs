//! User record and its public projection.

use serde::Serialize;
use utoipa::ToSchema;

/// A row of `users`. Never serialized: `password` is plain text as stored.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password: Option<String>,
}

/// What the API exposes for a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserPublic {
    pub id: i64,
    pub name: String,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

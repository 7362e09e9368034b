//! Read queries against `users`.

use crate::error::AppError;
use crate::model::User;
use sqlx::AnyConnection;

pub struct UserService;

impl UserService {
    /// Every row in `users`, in whatever order the engine returns them.
    pub async fn list_all(conn: &mut AnyConnection) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>("SELECT id, name, password FROM users")
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }
}

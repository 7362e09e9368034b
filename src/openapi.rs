//! OpenAPI document for the public routes.

use crate::model::UserPublic;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::users::list_users,
        crate::handlers::pages::index,
        crate::handlers::pages::favicon
    ),
    components(schemas(UserPublic)),
    tags(
        (name = "users", description = "Read-only user listing"),
        (name = "pages", description = "HTML page and favicon")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

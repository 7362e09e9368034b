mod docs;
mod pages;
mod users;

pub use docs::docs_routes;
pub use pages::{page_routes, static_routes};
pub use users::user_routes;

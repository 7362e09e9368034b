//! HTTP handlers for the users API and the pages.

pub mod pages;
pub mod users;
pub use pages::*;
pub use users::*;

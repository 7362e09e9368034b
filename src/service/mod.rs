//! Explicit query layer over the record store.

mod users;
pub use users::UserService;

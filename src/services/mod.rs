//! Business logic: user join and login.

pub mod user;

pub use user::UserService;

//! Data models: response envelope and user request/response bodies.

pub mod envelope;
pub mod user;

pub use envelope::*;
pub use user::*;

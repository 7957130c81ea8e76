//! Request extractors shared by the HTTP handlers.

pub mod json;

pub use json::{describe_violation, ValidatedJson};

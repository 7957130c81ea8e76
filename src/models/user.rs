//! Request and response bodies for the user endpoints.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::UserRow;

/// Usernames are 2 to 20 ASCII letters or digits.
pub static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{2,20}$").expect("valid username regex"));

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinRequest {
    #[validate(regex(path = *USERNAME_RE, message = "must be 2–20 alphanumeric characters"))]
    pub username: String,
    #[validate(length(min = 4, max = 20, message = "must be 4–20 characters"))]
    pub password: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Body of a successful join. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<UserRow> for JoinResponse {
    fn from(user: UserRow) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

//! Seed users for local runs and test scenarios.

use crate::auth::hash_password;
use crate::error::AppResult;

use super::{UserRepository, UserRow};

pub const FIXTURE_PASSWORD: &str = "1234";
pub const FIXTURE_USERNAMES: [&str; 3] = ["ssar", "cos", "love"];

/// Insert `ssar`, `cos` and `love` (password `1234`, email `<name>@nate.com`).
///
/// On an empty store they get ids 1 to 3.
pub async fn seed_users(repo: &dyn UserRepository) -> AppResult<Vec<UserRow>> {
    let mut rows = Vec::with_capacity(FIXTURE_USERNAMES.len());
    for username in FIXTURE_USERNAMES {
        let email = format!("{username}@nate.com");
        let hash = hash_password(FIXTURE_PASSWORD)?;
        rows.push(repo.create(username, &email, &hash).await?);
    }
    tracing::debug!(count = rows.len(), "seeded fixture users");
    Ok(rows)
}

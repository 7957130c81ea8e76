//! In-process user store, used when no `DATABASE_URL` is configured and in tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

use super::{UserRepository, UserRow};

#[derive(Default)]
struct Inner {
    last_id: i64,
    users: Vec<UserRow>,
}

/// Ids start at 1 and grow by one per created user.
#[derive(Default)]
pub struct MemoryUserRepository {
    inner: RwLock<Inner>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<UserRow> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.username == username) {
            return Err(AppError::DuplicateUsername);
        }

        inner.last_id += 1;
        let row = UserRow {
            id: inner.last_id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        inner.users.push(row.clone());
        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRow>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.inner.read().await.users.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_monotonic_from_one() {
        let repo = MemoryUserRepository::new();
        let a = repo.create("ssar", "ssar@nate.com", "h").await.unwrap();
        let b = repo.create("cos", "cos@nate.com", "h").await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_without_write() {
        let repo = MemoryUserRepository::new();
        repo.create("ssar", "ssar@nate.com", "h").await.unwrap();

        let err = repo.create("ssar", "other@nate.com", "h").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername));
        assert_eq!(repo.count().await.unwrap(), 1);

        let next = repo.create("love", "love@nate.com", "h").await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn find_by_username_is_exact() {
        let repo = MemoryUserRepository::new();
        repo.create("ssar", "ssar@nate.com", "h").await.unwrap();

        let found = repo.find_by_username("ssar").await.unwrap().unwrap();
        assert_eq!(found.email, "ssar@nate.com");
        assert!(repo.find_by_username("SSAR").await.unwrap().is_none());
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }
}

//! User registration and authentication.

use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::{hash_password, verify_against_dummy, verify_password};
use crate::db::{UserRepository, UserRow};
use crate::error::{AppError, AppResult};
use crate::models::{JoinRequest, LoginRequest};

/// Join and login over a [`UserRepository`]. Input is expected to be validated.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Create the user. Fails with [`AppError::DuplicateUsername`] if taken.
    pub async fn join(&self, req: &JoinRequest) -> AppResult<UserRow> {
        if self.repo.find_by_username(&req.username).await?.is_some() {
            warn!(username = %req.username, "join rejected: duplicate username");
            return Err(AppError::DuplicateUsername);
        }

        let password_hash = hash_password(&req.password)?;
        let user = self
            .repo
            .create(&req.username, &req.email, &password_hash)
            .await?;

        info!(user_id = user.id, username = %user.username, "user joined");
        Ok(user)
    }

    /// Unknown user and wrong password both yield [`AppError::InvalidCredentials`].
    pub async fn login(&self, req: &LoginRequest) -> AppResult<UserRow> {
        let user = match self.repo.find_by_username(&req.username).await? {
            Some(user) => user,
            None => {
                verify_against_dummy(&req.password);
                warn!(username = %req.username, "login rejected: unknown username");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !verify_password(&req.password, &user.password_hash)? {
            warn!(username = %req.username, "login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        info!(user_id = user.id, "user logged in");
        Ok(user)
    }
}

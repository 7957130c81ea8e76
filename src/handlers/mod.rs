//! HTTP request handlers and the state they share.

pub mod user;

pub use user::{join, login};

use std::sync::Arc;

use crate::db::UserRepository;
use crate::services::UserService;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: UserService::new(repo),
        }
    }

    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }
}

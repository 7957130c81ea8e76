//! Blog user service: join and login over HTTP.
//!
//! Every response, success or failure, is a JSON envelope
//! `{ "status", "msg", "body" }`. Users live behind a [`db::UserRepository`]
//! (PostgreSQL or in-memory).

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::AppState;
pub use models::ApiResponse;
pub use services::UserService;

use axum::routing::post;
use tower_http::trace::TraceLayer;

/// Build the API router (join, login). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/join", post(handlers::join))
        .route("/login", post(handlers::login))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Application error types, rendered as the uniform response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ApiResponse;

pub const MSG_INTERNAL: &str = "internal server error";

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// A request field broke a validation rule. Carries `"<message> : <field>"`.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be read as the expected JSON document.
    #[error("{0}")]
    Payload(String),

    #[error("duplicate username")]
    DuplicateUsername,

    #[error("incorrect username or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Payload(_) | AppError::DuplicateUsername => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client. Server faults stay opaque.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(_)
            | AppError::Payload(_)
            | AppError::DuplicateUsername
            | AppError::InvalidCredentials => self.to_string(),
            AppError::Db(_) | AppError::Internal(_) => MSG_INTERNAL.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }

        ApiResponse::<()>::error(status, self.client_message()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

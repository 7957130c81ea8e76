//! User HTTP handlers: join, login.

use axum::extract::State;

use crate::error::AppError;
use crate::handlers::AppState;
use crate::middleware::ValidatedJson;
use crate::models::{ApiResponse, JoinRequest, JoinResponse, LoginRequest};

/// POST /join
pub async fn join(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<JoinRequest>,
) -> Result<ApiResponse<JoinResponse>, AppError> {
    let user = state.user_service().join(&body).await?;
    Ok(ApiResponse::success(JoinResponse::from(user)))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<()>, AppError> {
    state.user_service().login(&body).await?;
    Ok(ApiResponse::ok())
}

//! Auth handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use courtyard_core::error::AppError;
use courtyard_service::auth::{LoginInput, RegisterInput};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LoginResponse>>), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let auth = state
        .auth_service
        .register(RegisterInput {
            username: body.username,
            name: body.name,
            email: body.email,
            password: body.password,
            branch: body.branch,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(auth.into()))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let auth = state
        .auth_service
        .login(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(auth.into())))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.auth_service.current_user(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

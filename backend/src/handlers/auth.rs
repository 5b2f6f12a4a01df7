use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{LoginRequest, LoginResponse, RegisterRequest, User, UserResponse},
    state::AppState,
    utils::{
        jwt::create_access_token,
        password::{hash_password, password_matches},
    },
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), AppError> {
    payload.validate()?;

    let password_hash = hash_password(&payload.password)?;
    let user = User::new(
        payload.name.trim().to_string(),
        payload.email.trim().to_string(),
        password_hash,
        payload.role,
    );
    let user = state.users.create(user).await?;
    tracing::info!(user_id = %user.id, role = user.role.as_str(), "user registered");

    let response = issue_token(&state, user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .users
        .find_by_email(payload.email.trim())
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    ensure_password_matches(&payload.password, &user.password_hash)?;

    if user.role != payload.role {
        tracing::debug!(user_id = %user.id, "login with mismatched role");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    Ok(Json(issue_token(&state, user)?))
}

pub fn ensure_password_matches(password: &str, stored_hash: &str) -> Result<(), AppError> {
    if password_matches(password, stored_hash) {
        Ok(())
    } else {
        Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()))
    }
}

fn issue_token(state: &AppState, user: User) -> Result<LoginResponse, AppError> {
    let token = create_access_token(
        user.id.clone(),
        user.role.as_str().to_string(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    Ok(LoginResponse {
        token,
        user: UserResponse::from(user),
    })
}

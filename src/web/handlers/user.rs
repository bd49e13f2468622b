//! User account handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::db::{NewUser, UserRepository, UserUpdate};
use crate::web::dto::{
    ApiResponse, AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest, UserInfo, ValidatedJson,
};
use crate::web::dto::validation::sanitize_string;
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// POST /users/register - Create an account and return a token.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    crate::validate_password(&req.password)
        .map_err(|e| ApiError::bad_request(format!("Password error: {}", e)))?;

    let password_hash = crate::hash_password(&req.password)
        .map_err(|_| ApiError::internal("Failed to hash password"))?;

    let name = sanitize_string(req.name.trim());
    let email = req.email.trim().to_string();

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .create(&NewUser::new(name, email, password_hash))
        .await
        .map_err(|e| match e {
            crate::LetterboxError::Conflict(_) => ApiError::conflict("Email already registered"),
            other => {
                tracing::error!("User creation failed: {}", other);
                ApiError::internal("Failed to create user")
            }
        })?;

    let token = state.issue_token(user.id)?;

    tracing::info!(user_id = user.id, "User registered");

    let response = AuthResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::new(response))))
}

/// POST /users/login - Verify credentials and return a token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let repo = UserRepository::new(state.db.pool());

    // Unknown email and wrong password produce the same response
    let user = repo
        .get_by_email(req.email.trim())
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    crate::verify_password(&req.password, &user.password)
        .map_err(|_| ApiError::unauthorized("Invalid email or password"))?;

    let token = state.issue_token(user.id)?;

    tracing::debug!(user_id = user.id, "User logged in");

    let response = AuthResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    };

    Ok(Json(ApiResponse::new(response)))
}

/// GET /users/getusers - List all users for the recipient picker.
pub async fn get_users(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<ApiResponse<Vec<UserInfo>>>, ApiError> {
    state.current_user(&claims).await?;

    let repo = UserRepository::new(state.db.pool());
    let users = repo.list_all().await?;

    let infos: Vec<UserInfo> = users.into_iter().map(UserInfo::from).collect();
    Ok(Json(ApiResponse::new(infos)))
}

/// PUT /users/profile - Update the caller's name and/or email.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserInfo>>, ApiError> {
    let user = state.current_user(&claims).await?;

    let mut update = UserUpdate::new();
    if let Some(ref name) = req.name {
        update = update.name(sanitize_string(name.trim()));
    }
    if let Some(ref email) = req.email {
        update = update.email(email.trim());
    }

    let repo = UserRepository::new(state.db.pool());
    let updated = repo
        .update(user.id, &update)
        .await
        .map_err(|e| match e {
            crate::LetterboxError::Conflict(_) => ApiError::conflict("Email already registered"),
            other => {
                tracing::error!("Profile update failed: {}", other);
                ApiError::internal("Failed to update profile")
            }
        })?
        .ok_or_else(|| ApiError::unauthorized("User in token not found"))?;

    Ok(Json(ApiResponse::new(updated.into())))
}

/// PUT /users/password - Change the caller's password.
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let user = state.current_user(&claims).await?;

    // The current password must match before anything changes
    crate::verify_password(&req.current_password, &user.password)
        .map_err(|_| ApiError::unauthorized("Current password is incorrect"))?;

    crate::validate_password(&req.new_password)
        .map_err(|e| ApiError::bad_request(format!("Password error: {}", e)))?;

    let password_hash = crate::hash_password(&req.new_password)
        .map_err(|_| ApiError::internal("Failed to hash password"))?;

    let repo = UserRepository::new(state.db.pool());
    repo.update(user.id, &UserUpdate::new().password(password_hash))
        .await?
        .ok_or_else(|| ApiError::unauthorized("User in token not found"))?;

    tracing::info!(user_id = user.id, "Password changed");

    Ok(Json(ApiResponse::new(())))
}

//! AI writing assistance handlers.
//!
//! Each request makes exactly one completion attempt. Failures come
//! back as a generic "try again" error without provider details.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::{ApiResponse, ChatRequest, ChatResponse, RewriteRequest, RewriteResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// POST /ai/rewrite - Rewrite letter text in a tone.
pub async fn rewrite(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(req): ValidatedJson<RewriteRequest>,
) -> Result<Json<ApiResponse<RewriteResponse>>, ApiError> {
    state.current_user(&claims).await?;

    let client = state
        .ai
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("AI assistance is disabled"))?;

    let rewritten = client
        .rewrite(&req.content, req.tone.as_deref())
        .await
        .map_err(|e| {
            tracing::warn!("Rewrite failed: {}", e);
            ApiError::upstream("Failed to rewrite letter. Please try again.")
        })?;

    Ok(Json(ApiResponse::new(RewriteResponse { rewritten })))
}

/// POST /ai/chat - Generate a letter from a free-form request.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(req): ValidatedJson<ChatRequest>,
) -> Result<Json<ApiResponse<ChatResponse>>, ApiError> {
    state.current_user(&claims).await?;

    let client = state
        .ai
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("AI assistance is disabled"))?;

    let letter = client
        .compose(&req.message, req.tone.as_deref(), req.length.as_deref())
        .await
        .map_err(|e| {
            tracing::warn!("Letter generation failed: {}", e);
            ApiError::upstream("Failed to generate letter. Please try again.")
        })?;

    Ok(Json(ApiResponse::new(ChatResponse { letter })))
}

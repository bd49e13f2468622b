//! Letter handlers.
//!
//! Every mutation runs as a single statement scoped to the author, and
//! a zero-row result maps to 404. Existing-but-invisible letters are
//! indistinguishable from missing ones in every response.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::letter::{LetterRepository, LetterUpdate, NewLetter};
use crate::web::dto::validation::sanitize_string;
use crate::web::dto::{
    ApiResponse, CreateLetterRequest, LetterResponse, PublicLetterResponse,
    ReceivedLetterResponse, UpdateLetterRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// POST /letters/postletter - Create a letter authored by the caller.
pub async fn create_letter(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(req): ValidatedJson<CreateLetterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LetterResponse>>), ApiError> {
    let user = state.current_user(&claims).await?;

    // The author is always the caller, never a field from the body
    let mut new_letter = NewLetter::new(
        user.id,
        sanitize_string(req.title.trim()),
        sanitize_string(&req.content),
    );
    if let Some(recipient_id) = req.recipient_id {
        new_letter = new_letter.recipient(recipient_id);
    }
    if req.is_public {
        new_letter = new_letter.public();
    }
    if req.is_ai_assisted {
        new_letter = new_letter.ai_assisted();
    }

    let repo = LetterRepository::new(state.db.pool());
    let letter = repo.create(&new_letter).await?;

    tracing::info!(letter_id = letter.id, author_id = user.id, "Letter created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(letter.into())),
    ))
}

/// GET /letters/getall - List letters authored by the caller.
pub async fn list_authored_letters(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<ApiResponse<Vec<LetterResponse>>>, ApiError> {
    let user = state.current_user(&claims).await?;

    let repo = LetterRepository::new(state.db.pool());
    let letters = repo.list_authored(user.id).await?;

    let responses: Vec<LetterResponse> = letters.into_iter().map(LetterResponse::from).collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// GET /letters/getallreceived - List letters addressed to the caller.
pub async fn list_received_letters(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<ApiResponse<Vec<ReceivedLetterResponse>>>, ApiError> {
    let user = state.current_user(&claims).await?;

    let repo = LetterRepository::new(state.db.pool());
    let letters = repo.list_received(user.id).await?;

    let responses: Vec<ReceivedLetterResponse> = letters
        .into_iter()
        .map(ReceivedLetterResponse::from)
        .collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// GET /letters/getid/:id - Fetch one letter as author or recipient.
pub async fn get_letter(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<LetterResponse>>, ApiError> {
    let user = state.current_user(&claims).await?;

    let repo = LetterRepository::new(state.db.pool());
    let letter = repo
        .find_for_user(id, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Letter not found"))?;

    Ok(Json(ApiResponse::new(letter.into())))
}

/// PUT /letters/putid/:id - Update a letter the caller authored.
pub async fn update_letter(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateLetterRequest>,
) -> Result<Json<ApiResponse<LetterResponse>>, ApiError> {
    let user = state.current_user(&claims).await?;

    let update = LetterUpdate::new()
        .title(sanitize_string(req.title.trim()))
        .content(sanitize_string(&req.content))
        .recipient_id(req.recipient_id)
        .is_public(req.is_public)
        .is_ai_assisted(req.is_ai_assisted);

    let repo = LetterRepository::new(state.db.pool());
    let affected = repo.update(id, user.id, &update).await?;

    // Missing letter and foreign letter are the same outcome
    if affected == 0 {
        return Err(ApiError::not_found("Letter not found"));
    }

    let letter = repo
        .find_for_user(id, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Letter not found"))?;

    Ok(Json(ApiResponse::new(letter.into())))
}

/// DELETE /letters/deleteid/:id - Delete a letter the caller authored.
pub async fn delete_letter(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let user = state.current_user(&claims).await?;

    let repo = LetterRepository::new(state.db.pool());
    let affected = repo.delete(id, user.id).await?;

    if affected == 0 {
        return Err(ApiError::not_found("Letter not found"));
    }

    tracing::info!(letter_id = id, author_id = user.id, "Letter deleted");

    Ok(Json(ApiResponse::new(())))
}

/// GET /letters/publicletters - Public feed, no authentication.
pub async fn list_public_letters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PublicLetterResponse>>>, ApiError> {
    let repo = LetterRepository::new(state.db.pool());
    let letters = repo.list_public().await?;

    let responses: Vec<PublicLetterResponse> = letters
        .into_iter()
        .map(PublicLetterResponse::from)
        .collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// GET /letters/publicletters/:id - One public letter, no authentication.
pub async fn get_public_letter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PublicLetterResponse>>, ApiError> {
    let repo = LetterRepository::new(state.db.pool());
    let letter = repo
        .find_public(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Letter not found"))?;

    Ok(Json(ApiResponse::new(letter.into())))
}

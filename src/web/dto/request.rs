//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::not_empty_trimmed;

/// User registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub name: String,
    /// Email address (login identifier).
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    /// Password (plain text, hashed server-side).
    pub password: String,
}

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub email: String,
    /// Password.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub password: String,
}

/// Profile update request. Omitted fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[serde(default)]
    #[validate(custom(function = "not_empty_trimmed"))]
    pub name: Option<String>,
    /// New email address.
    #[serde(default)]
    #[validate(email(message = "Must be a valid email address"))]
    pub email: Option<String>,
}

/// Password change request.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password, re-verified against the stored hash.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub current_password: String,
    /// New password.
    pub new_password: String,
}

/// Letter creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLetterRequest {
    /// Letter title.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub title: String,
    /// Letter body.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub content: String,
    /// Optional recipient user ID.
    #[serde(default)]
    pub recipient_id: Option<i64>,
    /// Whether the letter is public.
    #[serde(default)]
    pub is_public: bool,
    /// Whether AI assistance was used.
    #[serde(default)]
    pub is_ai_assisted: bool,
}

/// Letter update request. Replaces the mutable fields of the letter;
/// a missing `recipient_id` clears the recipient.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLetterRequest {
    /// New title.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub title: String,
    /// New body.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub content: String,
    /// New recipient user ID.
    #[serde(default)]
    pub recipient_id: Option<i64>,
    /// New public flag.
    #[serde(default)]
    pub is_public: bool,
    /// New AI-assisted flag.
    #[serde(default)]
    pub is_ai_assisted: bool,
}

/// AI rewrite request.
#[derive(Debug, Deserialize, Validate)]
pub struct RewriteRequest {
    /// Letter text to rewrite.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub content: String,
    /// Desired tone.
    #[serde(default)]
    pub tone: Option<String>,
}

/// AI letter generation request.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    /// What the letter should say.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub message: String,
    /// Desired tone.
    #[serde(default)]
    pub tone: Option<String>,
    /// Desired length.
    #[serde(default)]
    pub length: Option<String>,
}

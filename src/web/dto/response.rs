//! Response DTOs for the Web API.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::letter::{Letter, PublicLetter, ReceivedLetter};
use crate::User;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Registration and login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Bearer token for subsequent requests.
    pub token: String,
}

/// User information in responses. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// A letter as seen by its author or recipient.
#[derive(Debug, Serialize)]
pub struct LetterResponse {
    /// Letter ID.
    pub id: i64,
    /// Letter title.
    pub title: String,
    /// Letter body.
    pub content: String,
    /// Author user ID.
    pub author_id: i64,
    /// Recipient user ID, if addressed.
    pub recipient_id: Option<i64>,
    /// Whether the letter is public.
    pub is_public: bool,
    /// Whether AI assistance was used.
    pub is_ai_assisted: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

impl From<Letter> for LetterResponse {
    fn from(letter: Letter) -> Self {
        Self {
            id: letter.id,
            title: letter.title,
            content: letter.content,
            author_id: letter.author_id,
            recipient_id: letter.recipient_id,
            is_public: letter.is_public,
            is_ai_assisted: letter.is_ai_assisted,
            created_at: letter.created_at,
        }
    }
}

/// A received letter, carrying the sender's identity.
#[derive(Debug, Serialize)]
pub struct ReceivedLetterResponse {
    /// Letter ID.
    pub id: i64,
    /// Letter title.
    pub title: String,
    /// Letter body.
    pub content: String,
    /// Author user ID.
    pub sender_id: i64,
    /// Author display name.
    pub sender_name: String,
    /// Whether the letter is also public.
    pub is_public: bool,
    /// Whether AI assistance was used.
    pub is_ai_assisted: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

impl From<ReceivedLetter> for ReceivedLetterResponse {
    fn from(letter: ReceivedLetter) -> Self {
        Self {
            id: letter.id,
            title: letter.title,
            content: letter.content,
            sender_id: letter.sender_id,
            sender_name: letter.sender_name,
            is_public: letter.is_public,
            is_ai_assisted: letter.is_ai_assisted,
            created_at: letter.created_at,
        }
    }
}

/// A public letter with its author's display name.
#[derive(Debug, Serialize)]
pub struct PublicLetterResponse {
    /// Letter ID.
    pub id: i64,
    /// Letter title.
    pub title: String,
    /// Letter body.
    pub content: String,
    /// Author user ID.
    pub author_id: i64,
    /// Author display name.
    pub author_name: String,
    /// Whether AI assistance was used.
    pub is_ai_assisted: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

impl From<PublicLetter> for PublicLetterResponse {
    fn from(letter: PublicLetter) -> Self {
        Self {
            id: letter.id,
            title: letter.title,
            content: letter.content,
            author_id: letter.author_id,
            author_name: letter.author_name,
            is_ai_assisted: letter.is_ai_assisted,
            created_at: letter.created_at,
        }
    }
}

/// AI rewrite response.
#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    /// The rewritten letter text.
    pub rewritten: String,
}

/// AI letter generation response.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The generated letter text.
    pub letter: String,
}

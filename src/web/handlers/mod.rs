//! Request handlers for the Web API.

mod ai;
mod letter;
mod user;

pub use ai::{chat, rewrite};
pub use letter::{
    create_letter, delete_letter, get_letter, get_public_letter, list_authored_letters,
    list_public_letters, list_received_letters, update_letter,
};
pub use user::{change_password, get_users, login, register, update_profile};

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::ai::AiClient;
use crate::db::UserRepository;
use crate::web::error::ApiError;
use crate::web::middleware::JwtClaims;
use crate::{Database, User};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Token lifetime in seconds.
    pub token_lifetime_secs: u64,
    /// AI client, absent when AI assistance is disabled.
    pub ai: Option<AiClient>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, token_lifetime_secs: u64) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            token_lifetime_secs,
            ai: None,
        }
    }

    /// Attach an AI client.
    pub fn with_ai_client(mut self, client: AiClient) -> Self {
        self.ai = Some(client);
        self
    }

    /// Issue a bearer token for a user.
    pub fn issue_token(&self, user_id: i64) -> Result<String, ApiError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = JwtClaims {
            sub: user_id,
            iat: now,
            exp: now + self.token_lifetime_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            ApiError::internal("Failed to generate token")
        })
    }

    /// Resolve the token subject to a live user row.
    ///
    /// A token whose user has been deleted is rejected before any
    /// business logic runs.
    pub async fn current_user(&self, claims: &JwtClaims) -> Result<User, ApiError> {
        let repo = UserRepository::new(self.db.pool());
        repo.get_by_id(claims.sub)
            .await?
            .ok_or_else(|| ApiError::unauthorized("User in token not found"))
    }
}

//! LetterBox - a letter-writing service.
//!
//! Users write letters, optionally address them to another user, and
//! optionally publish them to a public feed. An AI collaborator can
//! rewrite drafts or compose letters from a prompt.

pub mod ai;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod letter;
pub mod logging;
pub mod web;

pub use ai::AiClient;
pub use auth::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository, UserUpdate};
pub use error::{LetterboxError, Result};
pub use letter::{
    can_delete, can_read, can_write, Letter, LetterRepository, LetterUpdate, NewLetter,
    PublicLetter, ReceivedLetter,
};
pub use web::WebServer;

//! Authentication primitives for LetterBox.
//!
//! Password hashing lives here; token issuing and verification are part
//! of the web layer where the JWT keys are held.

mod password;

pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};

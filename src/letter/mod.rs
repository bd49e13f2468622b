//! Letter domain for LetterBox.
//!
//! A letter has exactly one author and at most one recipient. Visibility
//! is evaluated per request from the row itself; there is no derived
//! sharing state anywhere.

mod access;
mod repository;
mod types;

pub use access::{can_delete, can_read, can_write};
pub use repository::LetterRepository;
pub use types::{Letter, LetterUpdate, NewLetter, PublicLetter, ReceivedLetter};

//! Letter types for LetterBox.

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A letter as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Letter {
    /// Letter ID.
    pub id: i64,
    /// Letter title.
    pub title: String,
    /// Letter body.
    pub content: String,
    /// Author user ID. Set once at creation, never changed.
    pub author_id: i64,
    /// Recipient user ID, if the letter is addressed to someone.
    pub recipient_id: Option<i64>,
    /// Whether the letter is readable by anyone.
    pub is_public: bool,
    /// Whether AI assistance was used while writing. Informational only.
    pub is_ai_assisted: bool,
    /// When the letter was created.
    pub created_at: NaiveDateTime,
}

/// A letter addressed to the caller, carrying the sender's identity.
///
/// `sender_id` is the author's user id under the name the inbox
/// consumers expect.
#[derive(Debug, Clone, FromRow)]
pub struct ReceivedLetter {
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
    /// Whether AI assistance was used while writing.
    pub is_ai_assisted: bool,
    /// When the letter was created.
    pub created_at: NaiveDateTime,
}

/// A public letter joined with its author's display name.
#[derive(Debug, Clone, FromRow)]
pub struct PublicLetter {
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
    /// Whether AI assistance was used while writing.
    pub is_ai_assisted: bool,
    /// When the letter was created.
    pub created_at: NaiveDateTime,
}

/// Data for creating a new letter.
#[derive(Debug, Clone)]
pub struct NewLetter {
    /// Letter title.
    pub title: String,
    /// Letter body.
    pub content: String,
    /// Author user ID (taken from the authenticated caller).
    pub author_id: i64,
    /// Optional recipient user ID.
    pub recipient_id: Option<i64>,
    /// Whether the letter is public.
    pub is_public: bool,
    /// Whether AI assistance was used.
    pub is_ai_assisted: bool,
}

impl NewLetter {
    /// Create a new private, unaddressed letter.
    pub fn new(author_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
            recipient_id: None,
            is_public: false,
            is_ai_assisted: false,
        }
    }

    /// Address the letter to a recipient.
    pub fn recipient(mut self, recipient_id: i64) -> Self {
        self.recipient_id = Some(recipient_id);
        self
    }

    /// Mark the letter as public.
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Mark the letter as AI-assisted.
    pub fn ai_assisted(mut self) -> Self {
        self.is_ai_assisted = true;
        self
    }
}

/// Partial update for a letter.
///
/// Only fields that are set will be modified. The author and creation
/// timestamp are never part of an update.
#[derive(Debug, Clone, Default)]
pub struct LetterUpdate {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// New recipient. `Some(None)` clears the recipient.
    pub recipient_id: Option<Option<i64>>,
    /// New public flag.
    pub is_public: Option<bool>,
    /// New AI-assisted flag.
    pub is_ai_assisted: Option<bool>,
}

impl LetterUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set or clear the recipient.
    pub fn recipient_id(mut self, recipient_id: Option<i64>) -> Self {
        self.recipient_id = Some(recipient_id);
        self
    }

    /// Set the public flag.
    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    /// Set the AI-assisted flag.
    pub fn is_ai_assisted(mut self, is_ai_assisted: bool) -> Self {
        self.is_ai_assisted = Some(is_ai_assisted);
        self
    }

    /// Check if the update is empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.recipient_id.is_none()
            && self.is_public.is_none()
            && self.is_ai_assisted.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_letter_defaults() {
        let letter = NewLetter::new(1, "Hello", "Dear friend");
        assert_eq!(letter.author_id, 1);
        assert_eq!(letter.title, "Hello");
        assert!(letter.recipient_id.is_none());
        assert!(!letter.is_public);
        assert!(!letter.is_ai_assisted);
    }

    #[test]
    fn test_new_letter_builder() {
        let letter = NewLetter::new(1, "Hello", "body")
            .recipient(2)
            .public()
            .ai_assisted();
        assert_eq!(letter.recipient_id, Some(2));
        assert!(letter.is_public);
        assert!(letter.is_ai_assisted);
    }

    #[test]
    fn test_letter_update_empty() {
        assert!(LetterUpdate::new().is_empty());
    }

    #[test]
    fn test_letter_update_builder() {
        let update = LetterUpdate::new().title("New title").is_public(true);
        assert_eq!(update.title.as_deref(), Some("New title"));
        assert_eq!(update.is_public, Some(true));
        assert!(update.content.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_letter_update_clear_recipient() {
        let update = LetterUpdate::new().recipient_id(None);
        assert_eq!(update.recipient_id, Some(None));
        assert!(!update.is_empty());
    }
}

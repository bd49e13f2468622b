//! Letter repository for LetterBox.
//!
//! Every query that mutates or reads a single letter carries the caller
//! identity in the WHERE clause, so a letter that exists but is not
//! visible to the caller behaves exactly like a letter that does not
//! exist.

use sqlx::{QueryBuilder, SqlitePool};

use super::types::{Letter, LetterUpdate, NewLetter, PublicLetter, ReceivedLetter};
use crate::{LetterboxError, Result};

const LETTER_COLUMNS: &str =
    "id, title, content, author_id, recipient_id, is_public, is_ai_assisted, created_at";

/// Repository for letter CRUD operations.
pub struct LetterRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LetterRepository<'a> {
    /// Create a new LetterRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new letter.
    ///
    /// The database assigns the id and creation timestamp.
    pub async fn create(&self, new_letter: &NewLetter) -> Result<Letter> {
        let result = sqlx::query(
            "INSERT INTO letters (title, content, author_id, recipient_id, is_public, is_ai_assisted)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_letter.title)
        .bind(&new_letter.content)
        .bind(new_letter.author_id)
        .bind(new_letter.recipient_id)
        .bind(new_letter.is_public)
        .bind(new_letter.is_ai_assisted)
        .execute(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        let letter = sqlx::query_as::<_, Letter>(&format!(
            "SELECT {LETTER_COLUMNS} FROM letters WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(letter)
    }

    /// Fetch a letter visible to the caller as author or recipient.
    ///
    /// Returns None both when the id does not exist and when the caller
    /// is neither the author nor the recipient.
    pub async fn find_for_user(&self, id: i64, caller: i64) -> Result<Option<Letter>> {
        let letter = sqlx::query_as::<_, Letter>(&format!(
            "SELECT {LETTER_COLUMNS} FROM letters
             WHERE id = ? AND (author_id = ? OR recipient_id = ?)"
        ))
        .bind(id)
        .bind(caller)
        .bind(caller)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(letter)
    }

    /// Fetch a single public letter with its author's display name.
    pub async fn find_public(&self, id: i64) -> Result<Option<PublicLetter>> {
        let letter = sqlx::query_as::<_, PublicLetter>(
            "SELECT l.id, l.title, l.content, l.author_id, u.name AS author_name,
                    l.is_ai_assisted, l.created_at
             FROM letters l
             JOIN users u ON u.id = l.author_id
             WHERE l.id = ? AND l.is_public = 1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(letter)
    }

    /// Update a letter in a single statement scoped to its author.
    ///
    /// Returns the number of rows affected. Zero means the id does not
    /// exist or the caller is not the author; the two cases are not
    /// distinguished.
    pub async fn update(&self, id: i64, caller: i64, update: &LetterUpdate) -> Result<u64> {
        if update.is_empty() {
            // Nothing to set; report whether the row would have matched
            let exists: (bool,) = sqlx::query_as(
                "SELECT EXISTS(SELECT 1 FROM letters WHERE id = ? AND author_id = ?)",
            )
            .bind(id)
            .bind(caller)
            .fetch_one(self.pool)
            .await
            .map_err(|e| LetterboxError::Database(e.to_string()))?;
            return Ok(u64::from(exists.0));
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE letters SET ");
        let mut separated = query.separated(", ");

        if let Some(ref title) = update.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title);
        }
        if let Some(ref content) = update.content {
            separated.push("content = ");
            separated.push_bind_unseparated(content);
        }
        if let Some(recipient_id) = update.recipient_id {
            separated.push("recipient_id = ");
            separated.push_bind_unseparated(recipient_id);
        }
        if let Some(is_public) = update.is_public {
            separated.push("is_public = ");
            separated.push_bind_unseparated(is_public);
        }
        if let Some(is_ai_assisted) = update.is_ai_assisted {
            separated.push("is_ai_assisted = ");
            separated.push_bind_unseparated(is_ai_assisted);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.push(" AND author_id = ");
        query.push_bind(caller);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Delete a letter in a single statement scoped to its author.
    ///
    /// Returns the number of rows affected, with the same zero-row
    /// semantics as `update`. This is a hard delete.
    pub async fn delete(&self, id: i64, caller: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM letters WHERE id = ? AND author_id = ?")
            .bind(id)
            .bind(caller)
            .execute(self.pool)
            .await
            .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// List letters authored by the caller, newest first.
    pub async fn list_authored(&self, caller: i64) -> Result<Vec<Letter>> {
        let letters = sqlx::query_as::<_, Letter>(&format!(
            "SELECT {LETTER_COLUMNS} FROM letters
             WHERE author_id = ?
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(caller)
        .fetch_all(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(letters)
    }

    /// List letters addressed to the caller, newest first.
    ///
    /// Each row carries the author's id and display name as the sender.
    pub async fn list_received(&self, caller: i64) -> Result<Vec<ReceivedLetter>> {
        let letters = sqlx::query_as::<_, ReceivedLetter>(
            "SELECT l.id, l.title, l.content,
                    l.author_id AS sender_id, u.name AS sender_name,
                    l.is_public, l.is_ai_assisted, l.created_at
             FROM letters l
             JOIN users u ON u.id = l.author_id
             WHERE l.recipient_id = ?
             ORDER BY l.created_at DESC, l.id DESC",
        )
        .bind(caller)
        .fetch_all(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(letters)
    }

    /// List all public letters with author names, newest first.
    pub async fn list_public(&self) -> Result<Vec<PublicLetter>> {
        let letters = sqlx::query_as::<_, PublicLetter>(
            "SELECT l.id, l.title, l.content, l.author_id, u.name AS author_name,
                    l.is_ai_assisted, l.created_at
             FROM letters l
             JOIN users u ON u.id = l.author_id
             WHERE l.is_public = 1
             ORDER BY l.created_at DESC, l.id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(letters)
    }
}

//! Database schema and migrations for LetterBox.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - users table
    r#"
-- Users table for registration and login
CREATE TABLE users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE COLLATE NOCASE,
    password    TEXT NOT NULL,           -- Argon2 hash
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_users_email ON users(email);
"#,
    // v2: Letters table
    r#"
-- Letters table: each letter has exactly one author and at most one recipient
CREATE TABLE letters (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    title           TEXT NOT NULL,
    content         TEXT NOT NULL,
    author_id       INTEGER NOT NULL REFERENCES users(id),
    recipient_id    INTEGER REFERENCES users(id),  -- NULL for unaddressed letters
    is_public       INTEGER NOT NULL DEFAULT 0,
    is_ai_assisted  INTEGER NOT NULL DEFAULT 0,
    created_at      TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_letters_author_id ON letters(author_id);
CREATE INDEX idx_letters_recipient_id ON letters(recipient_id);
CREATE INDEX idx_letters_is_public ON letters(is_public);
CREATE INDEX idx_letters_created_at ON letters(created_at);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_users_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE users"));
        assert!(first.contains("name"));
        assert!(first.contains("email"));
        assert!(first.contains("password"));
    }

    #[test]
    fn test_letters_migration_contains_letters_table() {
        let letters_migration = MIGRATIONS[1];
        assert!(letters_migration.contains("CREATE TABLE letters"));
        assert!(letters_migration.contains("title"));
        assert!(letters_migration.contains("content"));
        assert!(letters_migration.contains("author_id"));
        assert!(letters_migration.contains("recipient_id"));
        assert!(letters_migration.contains("is_public"));
        assert!(letters_migration.contains("is_ai_assisted"));
    }

    #[test]
    fn test_migrations_are_valid_sql() {
        for migration in MIGRATIONS {
            assert!(!migration.trim().is_empty());
            assert!(
                migration.contains("CREATE TABLE")
                    || migration.contains("ALTER TABLE")
                    || migration.contains("CREATE INDEX")
            );
        }
    }
}

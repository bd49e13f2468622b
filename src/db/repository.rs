//! User repository for LetterBox.
//!
//! This module provides CRUD operations for users in the database.

use sqlx::{QueryBuilder, SqlitePool};

use super::user::{NewUser, User, UserUpdate};
use crate::{LetterboxError, Result};

/// Repository for user CRUD operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// Returns the created user with the assigned ID.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if e.to_string().contains("UNIQUE") {
                    LetterboxError::Conflict("email already registered".to_string())
                } else {
                    LetterboxError::Database(e.to_string())
                }
            })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| LetterboxError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a user by email (case-insensitive).
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, created_at
             FROM users WHERE email = ? COLLATE NOCASE",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Update a user by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated user, or None if not found.
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<Option<User>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut separated = query.separated(", ");

        if let Some(ref name) = update.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name);
        }
        if let Some(ref email) = update.email {
            separated.push("email = ");
            separated.push_bind_unseparated(email);
        }
        if let Some(ref password) = update.password {
            separated.push("password = ");
            separated.push_bind_unseparated(password);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                LetterboxError::Conflict("email already registered".to_string())
            } else {
                LetterboxError::Database(e.to_string())
            }
        })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// List all users, ordered by display name.
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, created_at FROM users ORDER BY name",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(users)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await
            .map_err(|e| LetterboxError::Database(e.to_string()))?;
        Ok(count.0)
    }

    /// Check if an email is already registered (case-insensitive).
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = ? COLLATE NOCASE)")
                .bind(email)
                .fetch_one(self.pool)
                .await
                .map_err(|e| LetterboxError::Database(e.to_string()))?;
        Ok(exists.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_user() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let new_user = NewUser::new("Alice", "alice@example.com", "hashedpw");
        let user = repo.create(&new_user).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password, "hashedpw");
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("Alice", "alice@example.com", "pw"))
            .await
            .unwrap();

        let result = repo
            .create(&NewUser::new("Other", "alice@example.com", "pw2"))
            .await;

        assert!(matches!(result, Err(LetterboxError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let created = repo
            .create(&NewUser::new("Alice", "alice@example.com", "pw"))
            .await
            .unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Alice");

        let not_found = repo.get_by_id(999).await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_get_by_email_case_insensitive() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("Alice", "Alice@Example.com", "pw"))
            .await
            .unwrap();

        let found = repo.get_by_email("alice@example.com").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "Alice@Example.com");

        let not_found = repo.get_by_email("nobody@example.com").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_update_user() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("Alice", "alice@example.com", "pw"))
            .await
            .unwrap();

        let update = UserUpdate::new().name("Alicia").email("alicia@example.com");
        let updated = repo.update(user.id, &update).await.unwrap().unwrap();

        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email, "alicia@example.com");
        // Unchanged fields
        assert_eq!(updated.password, "pw");
    }

    #[tokio::test]
    async fn test_update_nonexistent_user() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let update = UserUpdate::new().name("Nobody");
        let result = repo.update(999, &update).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_empty() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("Alice", "alice@example.com", "pw"))
            .await
            .unwrap();

        let result = repo.update(user.id, &UserUpdate::new()).await.unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().name, "Alice");
    }

    #[tokio::test]
    async fn test_update_email_conflict() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("Alice", "alice@example.com", "pw"))
            .await
            .unwrap();
        let bob = repo
            .create(&NewUser::new("Bob", "bob@example.com", "pw"))
            .await
            .unwrap();

        let update = UserUpdate::new().email("alice@example.com");
        let result = repo.update(bob.id, &update).await;

        assert!(matches!(result, Err(LetterboxError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_list_all() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("Carol", "carol@example.com", "pw"))
            .await
            .unwrap();
        repo.create(&NewUser::new("Alice", "alice@example.com", "pw"))
            .await
            .unwrap();
        repo.create(&NewUser::new("Bob", "bob@example.com", "pw"))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
        // Ordered by name
        assert_eq!(all[0].name, "Alice");
        assert_eq!(all[1].name, "Bob");
        assert_eq!(all[2].name, "Carol");
    }

    #[tokio::test]
    async fn test_count() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(&NewUser::new("Alice", "alice@example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_email_exists() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        assert!(!repo.email_exists("alice@example.com").await.unwrap());

        repo.create(&NewUser::new("Alice", "alice@example.com", "pw"))
            .await
            .unwrap();

        assert!(repo.email_exists("alice@example.com").await.unwrap());
        assert!(repo.email_exists("ALICE@EXAMPLE.COM").await.unwrap());
        assert!(!repo.email_exists("bob@example.com").await.unwrap());
    }
}

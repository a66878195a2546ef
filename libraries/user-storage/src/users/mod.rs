//! User CRUD queries
//!
//! One parameterized statement per operation; row-to-entity mapping is a
//! direct column-to-field copy. Constraint enforcement lives entirely in
//! the schema.

use crate::{Result, StorageError};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use user_core::{User, UserId};

/// Data-access component for the `users` table
///
/// Holds an externally supplied pool; never opens, migrates, or closes the
/// database itself. Callers needing concurrency serialize their own access
/// or clone the repository (the pool handle is cheaply cloneable).
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Wrap an already-open connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return it with the store-assigned `id`,
    /// `created_at`, and `updated_at`
    ///
    /// # Errors
    ///
    /// [`StorageError::ConstraintViolation`] when `username` or `email`
    /// already exists; [`StorageError::OperationFailed`] for any other
    /// statement failure.
    pub async fn create(&self, user: &User) -> Result<User> {
        let (id, created_at, updated_at): (UserId, DateTime<Utc>, DateTime<Utc>) =
            sqlx::query_as(
                "INSERT INTO users (username, email, first_name, last_name)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, created_at, updated_at",
            )
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .fetch_one(&self.pool)
            .await?;

        Ok(User {
            id: Some(id),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        })
    }

    /// Find a user by id; `None` when no row matches
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, first_name, last_name, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by username; `None` when no row matches
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, first_name, last_name, created_at, updated_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by email; `None` when no row matches
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, first_name, last_name, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Rewrite a user's profile columns and refresh `updated_at`
    ///
    /// The entity must carry the id of an existing row. `created_at` is
    /// never touched.
    ///
    /// # Errors
    ///
    /// [`StorageError::OperationFailed`] when the entity has no id or the
    /// id matches no row; [`StorageError::ConstraintViolation`] when the
    /// new `username`/`email` collides with another row.
    pub async fn update(&self, user: &User) -> Result<User> {
        let id = user.id.ok_or_else(|| {
            StorageError::OperationFailed("cannot update a user without an id".to_string())
        })?;

        let row: Option<(DateTime<Utc>, DateTime<Utc>)> = sqlx::query_as(
            "UPDATE users
             SET username = $1, email = $2, first_name = $3, last_name = $4,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $5
             RETURNING created_at, updated_at",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let (created_at, updated_at) = row
            .ok_or_else(|| StorageError::OperationFailed(format!("user with id {id} not found")))?;

        Ok(User {
            id: Some(id),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        })
    }

    /// Delete a user by id
    ///
    /// Returns whether a row was actually removed; a nonexistent id is not
    /// an error.
    pub async fn delete(&self, id: UserId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All users, ordered by id ascending
    pub async fn find_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, email, first_name, last_name, created_at, updated_at
             FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Total row count
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Remove every row; test-isolation helper, not part of normal flow
    pub async fn delete_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(())
    }
}

//! User repository implementation.

use sqlx::PgPool;

use skinvault_core::error::{AppError, ErrorKind};
use skinvault_core::result::AppResult;
use skinvault_entity::user::{NewUser, User};

/// Repository for user account persistence.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by login (exact match).
    pub async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by login", e)
            })
    }

    /// Find the user whose currently stored token equals `token`.
    ///
    /// Exact string match. A superseded token no longer matches any row,
    /// which is how old tokens are invalidated without a revocation list.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by token", e)
            })
    }

    /// Insert a new user and return the created row.
    pub async fn insert(&self, new_user: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (login, password_hash, token) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&new_user.login)
        .bind(&new_user.password_hash)
        .bind(&new_user.token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert user", e))
    }

    /// Replace the stored token for `login`, returning the number of
    /// affected rows. Last writer wins on concurrent replacements.
    pub async fn replace_token(&self, login: &str, token: &str) -> AppResult<u64> {
        let result = sqlx::query("UPDATE users SET token = $1 WHERE login = $2")
            .bind(token)
            .bind(login)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to replace user token", e)
            })?;

        Ok(result.rows_affected())
    }
}

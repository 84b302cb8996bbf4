//! Skin repository implementation.
//!
//! All lookups are scoped by the owner's login so a user can never read
//! or delete another user's records.

use sqlx::PgPool;

use skinvault_core::error::{AppError, ErrorKind};
use skinvault_core::result::AppResult;
use skinvault_entity::skin::{NewSkin, Skin};

/// Repository for skin record persistence.
#[derive(Debug, Clone)]
pub struct SkinRepository {
    pool: PgPool,
}

impl SkinRepository {
    /// Create a new skin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new skin record and return the created row.
    pub async fn insert(&self, new_skin: &NewSkin) -> AppResult<Skin> {
        sqlx::query_as::<_, Skin>(
            "INSERT INTO skins (owner_login, name, kind, src) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&new_skin.owner_login)
        .bind(&new_skin.name)
        .bind(&new_skin.kind)
        .bind(&new_skin.src)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert skin", e))
    }

    /// List all skins owned by `owner`.
    pub async fn find_by_owner(&self, owner: &str) -> AppResult<Vec<Skin>> {
        sqlx::query_as::<_, Skin>("SELECT * FROM skins WHERE owner_login = $1 ORDER BY id")
            .bind(owner)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list skins by owner", e)
            })
    }

    /// Find a skin by id, scoped to `owner`.
    pub async fn find_by_id(&self, owner: &str, id: i32) -> AppResult<Option<Skin>> {
        sqlx::query_as::<_, Skin>("SELECT * FROM skins WHERE id = $1 AND owner_login = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find skin by id", e))
    }

    /// Delete a skin by id, scoped to `owner`. Returns the number of
    /// affected rows.
    pub async fn delete(&self, owner: &str, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM skins WHERE id = $1 AND owner_login = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete skin", e))?;

        Ok(result.rows_affected())
    }
}

//! Store traits decoupling services from the relational backend.
//!
//! The concrete sqlx repositories implement these traits; tests provide
//! in-memory implementations.

use async_trait::async_trait;

use skinvault_core::result::AppResult;
use skinvault_database::repositories::{SkinRepository, UserRepository};
use skinvault_entity::skin::{NewSkin, Skin};
use skinvault_entity::user::{NewUser, User};

/// Persistence operations for user accounts and their current tokens.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by login (exact match).
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Find the user whose currently stored token equals `token`.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<User>>;

    /// Insert a new user and return the created row.
    async fn insert(&self, new_user: &NewUser) -> AppResult<User>;

    /// Replace the stored token for `login`; returns affected row count.
    async fn replace_token(&self, login: &str, token: &str) -> AppResult<u64>;
}

/// Persistence operations for skin records, always owner-scoped.
#[async_trait]
pub trait SkinStore: Send + Sync {
    /// Insert a new skin record and return the created row.
    async fn insert(&self, new_skin: &NewSkin) -> AppResult<Skin>;

    /// List all skins owned by `owner`.
    async fn find_by_owner(&self, owner: &str) -> AppResult<Vec<Skin>>;

    /// Find a skin by id, scoped to `owner`.
    async fn find_by_id(&self, owner: &str, id: i32) -> AppResult<Option<Skin>>;

    /// Delete a skin by id, scoped to `owner`; returns affected row count.
    async fn delete(&self, owner: &str, id: i32) -> AppResult<u64>;
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_login(self, login).await
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_token(self, token).await
    }

    async fn insert(&self, new_user: &NewUser) -> AppResult<User> {
        UserRepository::insert(self, new_user).await
    }

    async fn replace_token(&self, login: &str, token: &str) -> AppResult<u64> {
        UserRepository::replace_token(self, login, token).await
    }
}

#[async_trait]
impl SkinStore for SkinRepository {
    async fn insert(&self, new_skin: &NewSkin) -> AppResult<Skin> {
        SkinRepository::insert(self, new_skin).await
    }

    async fn find_by_owner(&self, owner: &str) -> AppResult<Vec<Skin>> {
        SkinRepository::find_by_owner(self, owner).await
    }

    async fn find_by_id(&self, owner: &str, id: i32) -> AppResult<Option<Skin>> {
        SkinRepository::find_by_id(self, owner, id).await
    }

    async fn delete(&self, owner: &str, id: i32) -> AppResult<u64> {
        SkinRepository::delete(self, owner, id).await
    }
}

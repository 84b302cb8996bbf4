//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user account.
///
/// The store tracks at most one live token per user; issuing a new token
/// replaces the stored value.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i32,
    /// Unique login name.
    pub login: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The currently issued session token.
    #[serde(skip_serializing)]
    pub token: String,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired login name.
    pub login: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Initial session token.
    pub token: String,
}

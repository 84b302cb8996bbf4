//! Response DTOs.

use serde::{Deserialize, Serialize};

use skinvault_entity::skin::Skin;

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome message.
    pub message: String,
}

/// Login response carrying the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token.
    pub token: String,
}

/// Status response for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Outcome status.
    pub status: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// A skin record as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinResponse {
    /// Skin identifier.
    pub id: i32,
    /// Skin display name.
    pub name: String,
    /// Skin model kind.
    pub kind: String,
    /// Skin image source.
    pub src: String,
}

impl From<Skin> for SkinResponse {
    fn from(skin: Skin) -> Self {
        Self {
            id: skin.id,
            name: skin.name,
            kind: skin.kind,
            src: skin.src,
        }
    }
}

/// The authenticated user's profile with their skin collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoResponse {
    /// Login name.
    pub login: String,
    /// All skins owned by the user.
    pub skins: Vec<SkinResponse>,
}

//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials body shared by registration and login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Login name.
    #[validate(length(min = 1, max = 20, message = "login must be 1-20 characters"))]
    pub login: String,
    /// Plaintext password; only ever held at the request boundary.
    #[validate(length(min = 1, max = 32, message = "password must be 1-32 characters"))]
    pub password: String,
}

/// Add-skin request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddSkinRequest {
    /// Skin display name.
    #[serde(rename = "skinname")]
    #[validate(length(min = 1, max = 30, message = "skin name must be 1-30 characters"))]
    pub name: String,
    /// Skin model kind, `"Classic"` or `"Slim"`.
    #[serde(rename = "skintype")]
    pub kind: String,
    /// Skin image source.
    #[serde(rename = "skinsrc")]
    #[validate(length(min = 1, max = 255, message = "skin source must be 1-255 characters"))]
    pub src: String,
}

//! Skin entity model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skinvault_core::error::AppError;

/// A skin record owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skin {
    /// Unique skin identifier.
    pub id: i32,
    /// Login of the owning user.
    pub owner_login: String,
    /// Display name of the skin.
    pub name: String,
    /// Skin model kind, `"Classic"` or `"Slim"`.
    pub kind: String,
    /// Source location of the skin image.
    pub src: String,
}

/// Data required to create a new skin record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkin {
    /// Login of the owning user.
    pub owner_login: String,
    /// Display name of the skin.
    pub name: String,
    /// Skin model kind.
    pub kind: String,
    /// Source location of the skin image.
    pub src: String,
}

/// The two supported skin model kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinKind {
    /// Classic (wide-arm) model.
    Classic,
    /// Slim (narrow-arm) model.
    Slim,
}

impl fmt::Display for SkinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "Classic"),
            Self::Slim => write!(f, "Slim"),
        }
    }
}

impl FromStr for SkinKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Classic" => Ok(Self::Classic),
            "Slim" => Ok(Self::Slim),
            _ => Err(AppError::validation("Invalid skin type")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_kind_parse() {
        assert_eq!("Classic".parse::<SkinKind>().unwrap(), SkinKind::Classic);
        assert_eq!("Slim".parse::<SkinKind>().unwrap(), SkinKind::Slim);
        assert!("slim".parse::<SkinKind>().is_err());
        assert!("Steve".parse::<SkinKind>().is_err());
    }
}

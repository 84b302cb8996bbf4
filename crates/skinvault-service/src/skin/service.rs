//! Skin record management.
//!
//! Every operation takes the owner's login resolved by the auth gate and
//! scopes all store access to it.

use std::sync::Arc;

use tracing::info;

use skinvault_core::error::AppError;
use skinvault_entity::skin::{NewSkin, Skin, SkinKind};

use crate::store::SkinStore;

/// Handles skin record CRUD for an authenticated owner.
#[derive(Clone)]
pub struct SkinService {
    skin_store: Arc<dyn SkinStore>,
}

impl SkinService {
    /// Creates a new skin service.
    pub fn new(skin_store: Arc<dyn SkinStore>) -> Self {
        Self { skin_store }
    }

    /// Adds a new skin for `owner` and returns the created record.
    pub async fn add_skin(
        &self,
        owner: &str,
        name: &str,
        kind: &str,
        src: &str,
    ) -> Result<Skin, AppError> {
        let kind: SkinKind = kind.parse()?;

        let skin = self
            .skin_store
            .insert(&NewSkin {
                owner_login: owner.to_string(),
                name: name.to_string(),
                kind: kind.to_string(),
                src: src.to_string(),
            })
            .await?;

        info!(owner = %owner, skin_id = skin.id, "Skin added");
        Ok(skin)
    }

    /// Lists all skins owned by `owner`.
    pub async fn list_skins(&self, owner: &str) -> Result<Vec<Skin>, AppError> {
        self.skin_store.find_by_owner(owner).await
    }

    /// Fetches a single skin owned by `owner`.
    pub async fn get_skin(&self, owner: &str, id: i32) -> Result<Skin, AppError> {
        self.skin_store
            .find_by_id(owner, id)
            .await?
            .ok_or_else(|| AppError::not_found("This skin does not exist"))
    }

    /// Deletes a skin owned by `owner`.
    pub async fn delete_skin(&self, owner: &str, id: i32) -> Result<(), AppError> {
        let rows = self.skin_store.delete(owner, id).await?;
        if rows == 0 {
            return Err(AppError::not_found("This skin does not exist"));
        }

        info!(owner = %owner, skin_id = id, "Skin deleted");
        Ok(())
    }
}

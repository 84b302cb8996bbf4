//! # skinvault-entity
//!
//! Domain entity models for SkinVault: user accounts and skin records.

pub mod skin;
pub mod user;

pub use skin::{NewSkin, Skin, SkinKind};
pub use user::{NewUser, User};

//! # skinvault-service
//!
//! Business logic services for SkinVault. `AuthService` owns the
//! credential-verification and token-refresh flow; `SkinService` owns
//! owner-scoped skin record CRUD. Both talk to the store through the
//! traits in [`store`], so they can be exercised against an in-memory
//! backend in tests.

pub mod auth;
pub mod skin;
pub mod store;

pub use auth::AuthService;
pub use skin::SkinService;
pub use store::{SkinStore, UserStore};

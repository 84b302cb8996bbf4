//! # skinvault-auth
//!
//! Authentication primitives for SkinVault.
//!
//! ## Modules
//!
//! - `jwt`: signed, time-bounded session token issuance and validation
//! - `password`: Argon2id password hashing and verification
//!
//! Both components are stateless once constructed: the signing secret and
//! hashing parameters are injected at construction time and never read
//! from ambient state, and every expiry comparison takes the current
//! instant as an explicit argument.

pub mod error;
pub mod jwt;
pub mod password;

pub use error::TokenError;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;

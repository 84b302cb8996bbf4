//! Authentication flows: registration, login with refresh-on-login, and
//! identity resolution.

pub mod service;

pub use service::AuthService;

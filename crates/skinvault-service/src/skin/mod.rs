//! Owner-scoped skin record CRUD.

pub mod service;

pub use service::SkinService;

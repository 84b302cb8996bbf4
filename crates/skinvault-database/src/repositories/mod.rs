//! Concrete repository implementations.

pub mod skin;
pub mod user;

pub use skin::SkinRepository;
pub use user::UserRepository;

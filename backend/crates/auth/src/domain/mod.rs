//! Domain Layer
//!
//! Contains the user entity, value objects, and the repository trait.

pub mod entity {
    pub mod user;
}
pub mod repository;
pub mod value_object {
    pub mod email;
    pub mod user_name;
}

// Re-exports
pub use entity::user::{NewUser, User};
pub use repository::UserRepository;
pub use value_object::{email::Email, user_name::UserName};

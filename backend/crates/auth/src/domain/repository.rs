//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
///
/// The store is the authority on email uniqueness: `create` fails with
/// [`AuthError::EmailTaken`](crate::error::AuthError::EmailTaken) when the
/// email is already registered.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its assigned id
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by (lowercased) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AuthResult<Option<User>>;
}

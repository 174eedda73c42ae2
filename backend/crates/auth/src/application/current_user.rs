//! Current User Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::UserProfile;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Looks up the profile of the authenticated subject
pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> AuthResult<UserProfile> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(|user| user.profile())
            .ok_or(AuthError::UserNotFound)
    }
}

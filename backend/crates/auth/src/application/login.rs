//! Login Use Case
//!
//! Verifies credentials and issues an identity token.

use std::sync::Arc;

use chrono::Utc;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let password = ClearTextPassword::for_verification(input.password);

        // Every lookup failure folds into the same error
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let user = match self.user_repo.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(e) => {
                tracing::warn!(error = %e, "User lookup failed during login");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let keys = self
            .config
            .token_keys
            .as_ref()
            .ok_or(AuthError::Configuration)?;

        let token = keys
            .issue(user.id.get(), user.email.as_str(), Utc::now())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput { token })
    }
}

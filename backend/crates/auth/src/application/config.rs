//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::token::TokenKeys;

/// Auth application configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Token signing keys; `None` when `JWT_SECRET` is not configured.
    /// Login fails with a configuration error in that case, registration
    /// keeps working.
    pub token_keys: Option<TokenKeys>,
}

impl AuthConfig {
    /// Build from an optional signing secret
    ///
    /// A secret the token layer rejects is logged and treated as missing.
    pub fn from_secret(secret: Option<&str>) -> Self {
        let token_keys = secret.and_then(|s| match TokenKeys::from_secret(s) {
            Ok(keys) => Some(keys),
            Err(e) => {
                tracing::error!(error = %e, "JWT_SECRET rejected; login will fail");
                None
            }
        });
        Self { token_keys }
    }
}

//! Identity Tokens
//!
//! HS256 JWTs carrying `{user_id, email, exp}`. Issued by the user service on
//! login, verified by the gateway on every protected request.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Claims carried by an identity token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject user id (numeric)
    pub user_id: i64,
    pub email: String,
    /// Expiry, Unix seconds
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Token has expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Signs and verifies identity tokens with one shared secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenKeys {
    /// An empty secret counts as missing.
    pub fn from_secret(secret: &str) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Issue a token that expires [`TOKEN_LIFETIME_HOURS`] after `now`
    pub fn issue(&self, user_id: i64, email: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = IdentityClaims {
            user_id,
            email: email.to_string(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        };
        self.sign(&claims)
    }

    pub fn sign(&self, claims: &IdentityClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()))
    }

    /// Verify signature and expiry, then decode the claims
    ///
    /// A `user_id` claim that is not an integer fails decoding and is
    /// reported as [`TokenError::Malformed`].
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<IdentityClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys").finish_non_exhaustive()
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` value
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::from_secret("test-secret").unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let now = Utc::now();
        let token = keys().issue(42, "alice@example.com", now).unwrap();

        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp, (now + Duration::hours(24)).timestamp());
    }

    #[test]
    fn test_empty_secret_is_missing() {
        assert!(matches!(
            TokenKeys::from_secret(""),
            Err(TokenError::MissingSecret)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = keys().issue(1, "a@b.c", Utc::now()).unwrap();
        let other = TokenKeys::from_secret("another-secret").unwrap();
        assert!(matches!(
            other.verify(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issued = Utc::now() - Duration::hours(48);
        let token = keys().issue(1, "a@b.c", issued).unwrap();
        assert!(matches!(keys().verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            keys().verify("not.a.token"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_numeric_user_id_rejected() {
        #[derive(Serialize)]
        struct Loose {
            user_id: &'static str,
            email: &'static str,
            exp: i64,
        }
        let claims = Loose {
            user_id: "abc",
            email: "a@b.c",
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(keys().verify(&token), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("abc"), None);
    }
}

//! Bearer token verification

use axum::http::{HeaderMap, header};
use kernel::id::UserId;
use platform::token::{TokenKeys, bearer_token};

use crate::error::GatewayError;

/// Subject id of a valid `Authorization: Bearer` token
pub fn require_identity(headers: &HeaderMap, keys: &TokenKeys) -> Result<UserId, GatewayError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or(GatewayError::MissingToken)?;

    let claims = keys.verify(token)?;
    Ok(UserId::new(claims.user_id))
}

//! Trusted subject identity
//!
//! The gateway strips any client-supplied `X-User-ID` and sets it from a
//! verified token, so backend services may trust the header as-is.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use kernel::error::app_error::AppError;
use kernel::id::UserId;

/// Header carrying the authenticated subject's numeric id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Read the subject id; `None` when absent, non-numeric or zero
pub fn user_id_from_headers(headers: &HeaderMap) -> Option<UserId> {
    headers
        .get(USER_ID_HEADER)?
        .to_str()
        .ok()?
        .parse::<UserId>()
        .ok()
        .filter(|id| !id.is_unset())
}

/// Extractor for the trusted subject id; rejects with 401
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedUserId(pub UserId);

impl<S> FromRequestParts<S> for TrustedUserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_id_from_headers(&parts.headers)
            .map(TrustedUserId)
            .ok_or_else(|| AppError::unauthorized("Missing or invalid X-User-ID header"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_user_id_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(user_id_from_headers(&headers), None);

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("42"));
        assert_eq!(user_id_from_headers(&headers), Some(UserId::new(42)));

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("abc"));
        assert_eq!(user_id_from_headers(&headers), None);

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("0"));
        assert_eq!(user_id_from_headers(&headers), None);
    }
}

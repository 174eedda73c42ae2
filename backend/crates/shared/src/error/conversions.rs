//! Boundary helpers
//!
//! Renders `AppError` as the `{"error": "..."}` body every service answers
//! with, and classifies store errors the services need to tell apart.

use super::app_error::AppError;

/// Postgres `unique_violation`
#[cfg(feature = "sqlx")]
pub const UNIQUE_VIOLATION: &str = "23505";

/// Postgres `numeric_value_out_of_range`
#[cfg(feature = "sqlx")]
pub const NUMERIC_OUT_OF_RANGE: &str = "22003";

#[cfg(feature = "sqlx")]
fn has_sqlstate(err: &sqlx::Error, sqlstate: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == sqlstate),
        _ => false,
    }
}

/// Whether a sqlx error is a unique-constraint violation
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, UNIQUE_VIOLATION)
}

/// Whether a sqlx error is an arithmetic overflow inside the statement
#[cfg(feature = "sqlx")]
pub fn is_numeric_out_of_range(err: &sqlx::Error) -> bool {
    has_sqlstate(err, NUMERIC_OUT_OF_RANGE)
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({ "error": single_line(self.message()) });

        (status, Json(body)).into_response()
    }
}

/// Collapse a message onto one line
pub fn single_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("lookup failed\n  product 7"), "lookup failed product 7");
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_non_database_error_has_no_sqlstate() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_numeric_out_of_range(&sqlx::Error::PoolTimedOut));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_body() {
        use axum::response::IntoResponse;
        use crate::error::kind::ErrorKind;

        let response = AppError::new(ErrorKind::NotFound, "Order\nnot found").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Order not found" }));
    }
}

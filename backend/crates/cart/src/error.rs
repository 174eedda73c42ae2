//! Cart Error Types
//!
//! Cart failures plus [`RemoteError`], the failure of a single outbound call
//! to the catalog or order service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type CartResult<T> = Result<T, CartError>;

/// Failure of one call to a peer service
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("{service} returned status {status}")]
    Status { service: &'static str, status: u16 },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("{0}")]
    Validation(String),

    #[error("cart is empty")]
    EmptyCart,

    /// A peer call failed before producing a usable answer
    #[error("{context}: {source}")]
    Dependency {
        context: String,
        #[source]
        source: RemoteError,
    },

    /// The order service answered with a non-success status
    #[error("order-service returned status {status}")]
    Upstream { status: u16 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CartError {
    pub fn dependency(context: impl Into<String>, source: RemoteError) -> Self {
        CartError::Dependency {
            context: context.into(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::Validation(_) | CartError::EmptyCart => ErrorKind::BadRequest,
            CartError::Dependency { .. } | CartError::Upstream { .. } => ErrorKind::BadGateway,
            CartError::Database(_) | CartError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; store failures keep their detail in logs only
    pub fn to_app_error(&self) -> AppError {
        match self {
            CartError::Database(_) | CartError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CartError::Database(e) => tracing::error!(error = %e, "Cart database error"),
            CartError::Internal(msg) => tracing::error!(message = %msg, "Cart internal error"),
            CartError::Dependency { .. } | CartError::Upstream { .. } => {
                tracing::error!(error = %self, "Cart dependency failure")
            }
            _ => tracing::debug!(error = %self, "Cart error"),
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        let app_err = err.to_app_error();
        app_err.with_source(err)
    }
}

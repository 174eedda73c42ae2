//! Order Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::OrderId;
use thiserror::Error;

pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("{0}")]
    Validation(String),

    #[error("Order {0} not found")]
    NotFound(OrderId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure to hand an event to the log; never surfaced to callers
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("event could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("event log rejected the record: {0}")]
    Delivery(String),
}

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::Validation(_) => ErrorKind::BadRequest,
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::Database(_) | OrderError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            OrderError::Database(_) | OrderError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            OrderError::Database(e) => tracing::error!(error = %e, "Order database error"),
            OrderError::Internal(msg) => tracing::error!(message = %msg, "Order internal error"),
            _ => tracing::debug!(error = %self, "Order error"),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let app_err = err.to_app_error();
        app_err.with_source(err)
    }
}

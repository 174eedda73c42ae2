//! Gateway Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing or invalid Authorization header")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    #[error("no route for {0}")]
    NoRoute(String),

    #[error("request body could not be read")]
    Body(String),

    #[error("upstream unavailable")]
    Upstream(#[source] reqwest::Error),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::MissingToken | GatewayError::InvalidToken(_) => ErrorKind::Unauthorized,
            GatewayError::NoRoute(_) => ErrorKind::NotFound,
            GatewayError::Body(_) => ErrorKind::BadRequest,
            GatewayError::Upstream(_) => ErrorKind::BadGateway,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            GatewayError::Upstream(e) => tracing::error!(error = %e, "Upstream request failed"),
            GatewayError::MissingToken | GatewayError::InvalidToken(_) => {
                tracing::warn!(error = %self, "Rejected unauthenticated request")
            }
            GatewayError::Body(reason) => tracing::debug!(%reason, "Unreadable request body"),
            GatewayError::NoRoute(_) => tracing::debug!(error = %self, "Gateway error"),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

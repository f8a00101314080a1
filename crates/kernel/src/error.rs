//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application errors.
///
/// Domain problems (bad form input, unknown restaurants) never reach this
/// type; they degrade to "nothing happens". Only infrastructure failures do.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("session error")]
    Session(#[from] tower_sessions::session::Error),

    #[error("template error")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Session(e) => {
                tracing::error!(error = %e, "session store error");
            }
            AppError::Template(e) => {
                tracing::error!(error = ?e, "template render error");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

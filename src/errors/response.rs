use axum::{
    response::{IntoResponse, Response, Redirect},
    http::StatusCode,
};
use crate::errors::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authentication errors send the browser back to the login form
            AppError::Auth(msg) => {
                tracing::debug!("Redirecting to login: {}", msg);
                Redirect::to("/login").into_response()
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }

            AppError::File(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("File not found: {}", e);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }

            // Everything else is logged and hidden behind a generic 500
            other => {
                tracing::error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

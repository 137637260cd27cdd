use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-level errors
///
/// Error bodies are plain text: the HTTP surface of this service passes the
/// underlying message through verbatim rather than wrapping it in JSON.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A required request parameter was absent or empty. Raised before any
    /// extractor call is made.
    #[error("{0}")]
    MissingInput(String),

    /// The media extractor failed: spawn failure, non-zero exit, timeout, or
    /// output we could not interpret.
    #[error("{0}")]
    Extractor(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Extractor(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

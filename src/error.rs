use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// ApiError
///
/// The single error taxonomy every handler maps its failures into. The
/// taxonomy-to-status mapping lives here and nowhere else, so all endpoints
/// produce the same `{"message": ...}` body shape for a given failure class.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request: missing, malformed, or oversized input; duplicate email;
    // rejected credentials (the original API reports those as 400, not 401).
    BadRequest(String),

    // 401 Unauthorized: missing, invalid, or expired bearer token.
    Unauthorized(String),

    // 403 Forbidden: the record exists but belongs to another user.
    Forbidden(String),

    // 404 Not Found: missing resource, or an ownership mismatch folded into
    // not-found by an owner-scoped query.
    NotFound(String),

    // 500 Internal Server Error: persistence or other unexpected failure.
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe error message. Never carries secrets, hashes, or backtraces.
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => msg,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

// Persistence failures surface as a generic 500. The real error is logged for
// operators; clients never see SQL-level detail.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("database error: {err}");
        ApiError::internal("An error occurred while processing your request")
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("password hashing error: {err}");
        ApiError::internal("An error occurred while processing your request")
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("token signing error: {err}");
        ApiError::internal("An error occurred while processing your request")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = json!({ "message": self.message() });
        (self.status_code(), Json(body)).into_response()
    }
}

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;
use tracing::{error, warn};

#[derive(Debug, ThisError)]
pub enum TodoError {
    #[error("invalid `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("todo {0} not found")]
    NotFound(i64),

    /// Path segment that can never address a todo, e.g. `abc`.
    #[error("todo `{0}` not found")]
    InvalidId(String),

    #[error("unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        TodoError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::Validation { .. } => StatusCode::BAD_REQUEST,
            TodoError::NotFound(_) | TodoError::InvalidId(_) => StatusCode::NOT_FOUND,
            TodoError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            TodoError::ConstraintViolation(_)
            | TodoError::Database(_)
            | TodoError::Config(_)
            | TodoError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for TodoError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_err)
                if matches!(
                    db_err.kind(),
                    ErrorKind::NotNullViolation | ErrorKind::CheckViolation
                ) =>
            {
                TodoError::ConstraintViolation(db_err.message().to_string())
            }
            _ => TodoError::Database(e),
        }
    }
}

impl From<figment::Error> for TodoError {
    fn from(e: figment::Error) -> Self {
        TodoError::Config(Box::new(e))
    }
}

/// Underlying error text of a 500 response, attached as a response extension.
/// Only rendered when debug mode is on.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl IntoResponse for TodoError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match &self {
            TodoError::Validation { .. } => {
                warn!(error = %self, "rejected request");
                ApiErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: self.to_string(),
                    detail: None,
                }
            }
            TodoError::NotFound(_) | TodoError::InvalidId(_) => ApiErrorBody {
                code: "NOT_FOUND".to_string(),
                message: self.to_string(),
                detail: None,
            },
            TodoError::UnsupportedMediaType(_) => {
                warn!(error = %self, "rejected request");
                ApiErrorBody {
                    code: "UNSUPPORTED_MEDIA_TYPE".to_string(),
                    message: self.to_string(),
                    detail: None,
                }
            }
            TodoError::ConstraintViolation(_)
            | TodoError::Database(_)
            | TodoError::Config(_)
            | TodoError::Io(_) => {
                error!(error = %self, "internal error while handling request");
                ApiErrorBody::internal(None)
            }
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();
        if status.is_server_error() {
            response
                .extensions_mut()
                .insert(ErrorDetail(self.to_string()));
        }
        response
    }
}

/// Standardized API error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Generic body for 5xx responses; `detail` is only filled in debug mode.
    pub fn internal(detail: Option<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal server error occurred.".to_string(),
            detail,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

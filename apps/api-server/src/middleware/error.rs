//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use thiserror::Error;
use validator::ValidationErrors;

use fitblog_core::{DomainError, RepoError};
use fitblog_shared::{ErrorResponse, FieldError};

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {detail}")]
    Validation {
        detail: String,
        errors: Vec<FieldError>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation { detail, errors } => {
                ErrorResponse::unprocessable(detail, errors.clone())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId(raw) => {
                tracing::debug!(blog_id = %raw, "Rejected malformed id");
                AppError::BadRequest("Invalid blog id".to_string())
            }
            DomainError::NotFound => AppError::NotFound("Blog not found".to_string()),
            DomainError::EmptyUpdate => AppError::BadRequest("No fields to update".to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Blog not found".to_string()),
            RepoError::Connection(msg) => {
                tracing::error!("Document store connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Document store query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Serialization(msg) => {
                tracing::error!("Stored document could not be mapped: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation {
            detail: "Request validation failed".to_string(),
            errors: FieldError::from_validation(&errors),
        }
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        AppError::Validation {
            detail: "Request body could not be parsed".to_string(),
            errors: vec![FieldError::new("body", err.to_string())],
        }
    }
}

impl From<QueryPayloadError> for AppError {
    fn from(err: QueryPayloadError) -> Self {
        AppError::Validation {
            detail: "Query string could not be parsed".to_string(),
            errors: vec![FieldError::new("query", err.to_string())],
        }
    }
}

/// JSON extractor settings: body errors render as 422 problem details.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req: &HttpRequest| AppError::from(err).into())
}

/// Query extractor settings: query errors render as 422 problem details.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req: &HttpRequest| AppError::from(err).into())
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

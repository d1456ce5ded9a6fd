use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use serde_json::json;

use thiserror::Error;

use crate::domain::ValidationError;
use crate::repo::PersistenceError;

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Parse Error: {0}")]
    ParseError(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl From<PersistenceError> for RestError {
    fn from(e: PersistenceError) -> Self {
        tracing::error!(error.cause_chain = ?e, "Failed to persist record: {}", e);
        Self::InternalError("Database error".into())
    }
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ParseError(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(e) => json!({
                "message": e.to_string(),
                "violations": e.violations(),
            }),
            other => json!({ "message": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Reject bodies that are not a JSON object before they reach a handler
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestError::ParseError(err.to_string()).into()
}

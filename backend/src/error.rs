//! Error type for the generation endpoint.
//!
//! Every failure of `POST /api/generate` ends up as a [`GenerateError`], which
//! actix turns into an HTTP status plus an [`ErrorResponse`] JSON body.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ValidationError;
use common::responses::{ErrorCode, ErrorResponse};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("generation service rejected the credentials (HTTP {status})")]
    UpstreamAuth { status: u16 },

    #[error("generation service returned no document")]
    GenerationEmpty,

    #[error("compilation failed: {reason}")]
    CompileFailed { status: Option<u16>, reason: String },

    /// The error body is logged where it is received and never sent on.
    #[error("generation service answered HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no result within {0:?}")]
    Timeout(Duration),
}

impl GenerateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GenerateError::Validation(_) => ErrorCode::InvalidRequest,
            GenerateError::UpstreamAuth { .. } => ErrorCode::UpstreamAuth,
            GenerateError::GenerationEmpty => ErrorCode::GenerationEmpty,
            GenerateError::CompileFailed { .. } => ErrorCode::CompileFailed,
            GenerateError::UpstreamStatus { .. } => ErrorCode::UpstreamError,
            GenerateError::Network(_) => ErrorCode::NetworkFailure,
            GenerateError::Timeout(_) => ErrorCode::Timeout,
        }
    }

    /// Whether another attempt at the same call could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GenerateError::Network(e) => e.is_connect() || e.is_timeout(),
            GenerateError::CompileFailed {
                status: Some(status),
                ..
            } => matches!(*status, 502..=504),
            _ => false,
        }
    }

    /// Message shown to the browser. Transport details stay in the log.
    fn public_message(&self) -> String {
        match self {
            GenerateError::Network(_) => {
                "could not reach an upstream service, please try again".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for GenerateError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenerateError::Validation(_) => StatusCode::BAD_REQUEST,
            GenerateError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.public_message(),
            code: self.code(),
            status: status.as_u16(),
        })
    }
}

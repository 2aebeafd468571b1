//! Error types for the validation contract service.
//!
//! Every request validation failure travels as a [`RequestValidationError`]
//! and leaves the service as a 422 response carrying the error envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::handlers::response::validation_error_response;
use crate::validation::RawError;

/// Batch of validation errors detected for one request.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Request validation failed with {} error(s)", .errors.len())]
pub struct RequestValidationError {
    errors: Vec<RawError>,
}

impl RequestValidationError {
    pub fn new(errors: Vec<RawError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[RawError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<RawError> {
        self.errors
    }

    /// Append another batch after this one.
    pub fn merge(mut self, other: RequestValidationError) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl From<RawError> for RequestValidationError {
    fn from(raw: RawError) -> Self {
        Self::new(vec![raw])
    }
}

impl ResponseError for RequestValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_response(&self) -> HttpResponse {
        validation_error_response(&self.errors)
    }
}

/// Join two extraction results, keeping every error when both failed.
///
/// Handlers take their extractors as `Result<_, RequestValidationError>` and
/// combine them so one response reports all failing request sections.
pub fn combine<A, B>(
    a: Result<A, RequestValidationError>,
    b: Result<B, RequestValidationError>,
) -> ValidationResult<(A, B)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(a), Err(b)) => Err(a.merge(b)),
    }
}

/// Result type alias for request validation.
pub type ValidationResult<T> = Result<T, RequestValidationError>;

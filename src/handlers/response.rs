use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::RawError;

/// Status code carried both on the response and inside the envelope.
pub const VALIDATION_ERROR_CODE: u16 = 422;

/// Fixed envelope message for validation failures.
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation Error";

/// One entry of the `details` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedDetail {
    /// Flat field name, e.g. `items.0.name` or `query.limit`. `body` when the
    /// payload could not be decoded at all.
    pub field: String,
    /// Human-readable message from the validation layer.
    pub message: String,
    /// Machine-readable error kind, e.g. `missing` or `json_invalid`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&RawError> for NormalizedDetail {
    fn from(raw: &RawError) -> Self {
        Self {
            field: raw.location.field(),
            message: raw.message().to_string(),
            kind: raw.kind().to_string(),
        }
    }
}

/// Inner `error` object of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always 422.
    pub code: u16,
    /// Always "Validation Error".
    pub message: String,
    /// One entry per detected violation, in detection order.
    pub details: Vec<NormalizedDetail>,
}

/// Response body for every failed request validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Build the envelope for one failed request, one detail per raw error in
/// input order.
pub fn respond(raw_errors: &[RawError]) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorBody {
            code: VALIDATION_ERROR_CODE,
            message: VALIDATION_ERROR_MESSAGE.to_string(),
            details: raw_errors.iter().map(NormalizedDetail::from).collect(),
        },
    }
}

/// Build a standardized 422 Unprocessable Entity response from raw validation errors.
pub fn validation_error_response(raw_errors: &[RawError]) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(respond(raw_errors))
}

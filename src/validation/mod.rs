//! Request validation layer.
//!
//! Extractors in this module deserialize the body, query string, route
//! parameters and headers of a request, and on failure produce [`RawError`]s
//! whose locations point at the offending value. The batch travels as a
//! [`RequestValidationError`], which renders as the 422 envelope.

pub mod constants;
mod de;
mod header;
mod json;
mod path;
mod query;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RequestValidationError;
use crate::location::{Location, Segment, Source};
use crate::metrics;

pub use header::{ValidatedHeaders, parse_headers};
pub use json::{ValidatedJson, parse_body};
pub use path::{ValidatedPath, parse_path};
pub use query::{ValidatedQuery, parse_query};

/// One detected violation as reported by the validation layer.
///
/// Serialized with the short keys used by common validation tooling
/// (`loc`, `msg`, `type`); every key may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawError {
    #[serde(default, rename = "loc", deserialize_with = "nullable_location")]
    pub location: Location,
    #[serde(default, rename = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl RawError {
    pub fn new(location: Location, message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            location,
            message: Some(message.into()),
            kind: Some(kind.into()),
        }
    }

    /// Message text, empty when absent.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    /// Error kind tag, empty when absent.
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }
}

fn nullable_location<'de, D>(deserializer: D) -> Result<Location, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Location>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wrap a batch produced by `source` into a [`RequestValidationError`],
/// logging and counting it on the way.
pub(crate) fn reject(source: Source, errors: Vec<RawError>) -> RequestValidationError {
    log::debug!(
        "Request validation failed in {}: {} error(s)",
        source,
        errors.len()
    );
    metrics::record_validation_failure(source.as_str(), &errors);
    RequestValidationError::new(errors)
}

/// Route failures of actix-web's stock `Json`, `Query` and `Path` extractors
/// into the 422 envelope.
///
/// These extractors do not track where inside the value deserialization
/// failed, so their details are located at the request section (plus the
/// missing field, when serde names one). Prefer the `Validated*` extractors.
///
/// `json_limit` caps stock `Json` bodies the way `PayloadConfig` caps the
/// `Validated*` ones.
pub fn configure_extractors(json_limit: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let raw = match &err {
        JsonPayloadError::ContentType => RawError::new(
            Location::root(Source::Body),
            constants::JSON_CONTENT_TYPE_MESSAGE,
            constants::JSON_TYPE,
        ),
        JsonPayloadError::Deserialize(e) if e.is_data() => {
            de::located(Source::Body, Vec::<Option<Segment>>::new(), de::strip_position(e))
        }
        JsonPayloadError::Deserialize(e) => RawError::new(
            Location::root(Source::Body).with(e.line()).with(e.column()),
            de::strip_position(e),
            constants::JSON_INVALID,
        ),
        // size limits and transport failures keep their own status
        _ => return err.into(),
    };
    reject(Source::Body, vec![raw]).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match &err {
        QueryPayloadError::Deserialize(e) => {
            let raw = de::located(Source::Query, Vec::<Option<Segment>>::new(), e.to_string());
            reject(Source::Query, vec![raw]).into()
        }
        _ => err.into(),
    }
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    match &err {
        PathError::Deserialize(e) => {
            let raw = de::located(Source::Path, Vec::<Option<Segment>>::new(), e.to_string());
            reject(Source::Path, vec![raw]).into()
        }
        _ => err.into(),
    }
}

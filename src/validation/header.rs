use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use serde::de::DeserializeOwned;

use super::query::deserialize_pairs;
use crate::error::RequestValidationError;
use crate::location::Source;

/// Header extractor whose failures are located at `header.<name>`.
///
/// Field names match header names lowercased with `-` replaced by `_`, so
/// `X-Token` is read into a field named `x_token`. Only the first value of a
/// repeated header is seen.
#[derive(Debug)]
pub struct ValidatedHeaders<T>(pub T);

impl<T> ValidatedHeaders<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedHeaders<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for ValidatedHeaders<T> {
    type Error = RequestValidationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_headers(req.headers()).map(ValidatedHeaders))
    }
}

/// Deserialize request headers into `T`. Values that are not visible ASCII
/// are skipped.
pub fn parse_headers<T: DeserializeOwned>(headers: &HeaderMap) -> Result<T, RequestValidationError> {
    let mut encoded = form_urlencoded::Serializer::new(String::new());
    for name in headers.keys() {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            encoded.append_pair(&name.as_str().replace('-', "_"), value);
        }
    }
    deserialize_pairs(Source::Header, &encoded.finish())
}

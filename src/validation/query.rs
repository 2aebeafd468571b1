use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use serde::de::DeserializeOwned;

use super::de::data_error;
use super::reject;
use crate::error::RequestValidationError;
use crate::location::Source;

/// Query string extractor whose failures are located at `query.<param>`.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> ValidatedQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for ValidatedQuery<T> {
    type Error = RequestValidationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_query(req.query_string()).map(ValidatedQuery))
    }
}

/// Deserialize a raw (still percent-encoded) query string into `T`.
pub fn parse_query<T: DeserializeOwned>(query: &str) -> Result<T, RequestValidationError> {
    deserialize_pairs(Source::Query, query)
}

/// Deserialize `application/x-www-form-urlencoded` pairs, locating failures
/// under `source`.
pub(crate) fn deserialize_pairs<T: DeserializeOwned>(
    source: Source,
    encoded: &str,
) -> Result<T, RequestValidationError> {
    let de = serde_urlencoded::Deserializer::new(form_urlencoded::parse(encoded.as_bytes()));
    serde_path_to_error::deserialize(de).map_err(|err| {
        let message = err.inner().to_string();
        reject(source, vec![data_error(source, err.path(), message)])
    })
}

use std::ops::Deref;

use actix_router::{Path, PathDeserializer, ResourcePath};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use serde::de::DeserializeOwned;

use super::de::data_error;
use super::reject;
use crate::error::RequestValidationError;
use crate::location::Source;

/// Route parameter extractor whose failures are located at `path.<param>`.
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

impl<T> ValidatedPath<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedPath<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for ValidatedPath<T> {
    type Error = RequestValidationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path(req.match_info()).map(ValidatedPath))
    }
}

/// Deserialize matched route parameters into `T`.
pub fn parse_path<T, R>(params: &Path<R>) -> Result<T, RequestValidationError>
where
    T: DeserializeOwned,
    R: ResourcePath,
{
    serde_path_to_error::deserialize(PathDeserializer::new(params)).map_err(|err| {
        let message = err.inner().to_string();
        reject(
            Source::Path,
            vec![data_error(Source::Path, err.path(), message)],
        )
    })
}

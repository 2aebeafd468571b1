use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpRequest};
use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use super::constants::{BODY_REQUIRED_MESSAGE, JSON_CONTENT_TYPE_MESSAGE, JSON_TYPE, MISSING};
use super::de::{data_error, decode_error, strip_position};
use super::{RawError, reject};
use crate::error::RequestValidationError;
use crate::location::{Location, Source};

/// JSON body extractor whose failures carry the location of the offending
/// field.
///
/// Deserialization stops at the first violation, so a body with several bad
/// fields is reported one field per request: `{}` against a model requiring
/// `name` and `age` yields only the `name` detail.
///
/// Body size limits come from [`actix_web::web::PayloadConfig`]; exceeding them
/// is a transport error and keeps actix-web's own status.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned + 'static> FromRequest for ValidatedJson<T> {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = Bytes::from_request(req, payload);

        async move {
            let body = body.await?;
            parse_body(content_type.as_deref(), &body)
                .map(ValidatedJson)
                .map_err(Into::into)
        }
        .boxed_local()
    }
}

/// Deserialize a request body into `T`, reporting the first failure.
pub fn parse_body<T: DeserializeOwned>(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<T, RequestValidationError> {
    if !is_json_content_type(content_type) {
        return Err(reject(
            Source::Body,
            vec![RawError::new(
                Location::root(Source::Body),
                JSON_CONTENT_TYPE_MESSAGE,
                JSON_TYPE,
            )],
        ));
    }

    if body.is_empty() {
        return Err(reject(
            Source::Body,
            vec![RawError::new(
                Location::root(Source::Body),
                BODY_REQUIRED_MESSAGE,
                MISSING,
            )],
        ));
    }

    let mut de = serde_json::Deserializer::from_slice(body);
    let value = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let raw = match err.inner().classify() {
            Category::Data => data_error(Source::Body, err.path(), strip_position(err.inner())),
            Category::Syntax | Category::Eof | Category::Io => decode_error(body, err.inner()),
        };
        reject(Source::Body, vec![raw])
    })?;

    // trailing characters after the document
    de.end()
        .map_err(|err| reject(Source::Body, vec![decode_error(body, &err)]))?;

    Ok(value)
}

/// A missing content type is accepted; anything else must be
/// `application/json` or a `+json` suffix type.
fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

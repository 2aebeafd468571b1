use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};

use crate::dtos::{AckDto, MessageDto, TestModel, UserDto, UserPath, UsersQuery};
use crate::error::{RequestValidationError, combine};
use crate::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/",
    summary = "Liveness banner",
    responses(
        (status = 200, description = "API is running", body = MessageDto),
    ),
    tag = "demo"
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageDto {
        message: "API is running".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/test",
    summary = "Accept any JSON object",
    description = "Exercises JSON decoding only: any object is accepted, anything that does not parse as a JSON object is rejected with field `body`.",
    responses(
        (status = 200, description = "Body parsed", body = AckDto),
        (status = 422, description = "Body is not a JSON object", body = crate::handlers::response::ErrorEnvelope),
    ),
    tag = "demo"
)]
pub async fn test_payload(payload: ValidatedJson<Map<String, Value>>) -> HttpResponse {
    log::debug!("Accepted payload with {} key(s)", payload.len());
    HttpResponse::Ok().json(AckDto {
        ok: true,
        data: None,
    })
}

#[utoipa::path(
    post,
    path = "/test-model",
    summary = "Validate a typed body",
    request_body = TestModel,
    responses(
        (status = 200, description = "Body matches the model", body = AckDto),
        (status = 422, description = "Body failed validation", body = crate::handlers::response::ErrorEnvelope),
    ),
    tag = "demo"
)]
pub async fn test_model(item: ValidatedJson<TestModel>) -> HttpResponse {
    HttpResponse::Ok().json(AckDto {
        ok: true,
        data: Some(item.into_inner()),
    })
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    summary = "Typed path and query parameters",
    description = "Path and query failures are reported together in one response.",
    params(UserPath, UsersQuery),
    responses(
        (status = 200, description = "Parameters parsed", body = UserDto),
        (status = 422, description = "Path or query failed validation", body = crate::handlers::response::ErrorEnvelope),
    ),
    tag = "demo"
)]
pub async fn get_user(
    path: Result<ValidatedPath<UserPath>, RequestValidationError>,
    query: Result<ValidatedQuery<UsersQuery>, RequestValidationError>,
) -> Result<web::Json<UserDto>, RequestValidationError> {
    let (path, query) = combine(path, query)?;
    Ok(web::Json(UserDto {
        user_id: path.user_id,
        limit: query.limit,
    }))
}

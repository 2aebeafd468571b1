use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use utoipa::OpenApi;

use super::{ApiDoc, HealthResponse};

#[utoipa::path(
    get,
    path = "/health",
    summary = "Health check",
    description = "Returns 200 while the process is serving requests. Use this for liveness probes.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "health"
)]
/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// OpenAPI document
pub async fn openapi_json() -> HttpResponse {
    match ApiDoc::openapi().to_json() {
        Ok(body) => HttpResponse::Ok()
            .insert_header(ContentType::json())
            .body(body),
        Err(e) => {
            log::error!("Failed to render OpenAPI document: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

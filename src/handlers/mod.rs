//! HTTP handlers for the validation contract service.
//!
//! This module contains all HTTP handler functions that can be used by both
//! the main application and integration tests.

mod demo;
mod health;
pub mod response;

use actix_web::web;
use utoipa::OpenApi;

use crate::dtos;

// Re-export handlers for route configuration
pub use demo::{get_user, root, test_model, test_payload};
pub use health::{health_check, openapi_json};

/// Health check response.
#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the process serves requests
    pub status: String,
    /// Crate version of the running binary
    pub version: String,
}

// =============================================================================
// OpenAPI Documentation
// =============================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        demo::root,
        demo::test_payload,
        demo::test_model,
        demo::get_user,
    ),
    components(schemas(
        HealthResponse,
        response::ErrorEnvelope,
        response::ErrorBody,
        response::NormalizedDetail,
        dtos::TestModel,
        dtos::ItemModel,
        dtos::UserDto,
        dtos::AckDto,
        dtos::MessageDto,
    )),
    tags(
        (name = "health", description = "Liveness probe."),
        (name = "demo", description = "Routes exercising the validation contract. Every request validation failure is answered with status 422 and the body {\"error\": {\"code\": 422, \"message\": \"Validation Error\", \"details\": [{\"field\", \"message\", \"type\"}]}}."),
    ),
    info(
        title = "Validation Contract API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

// =============================================================================
// Route Configuration
// =============================================================================

/// Configure all routes for the application.
/// This can be used by both the main application and integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/test", web::post().to(test_payload))
        .route("/test-model", web::post().to(test_model))
        .route("/users/{user_id}", web::get().to(get_user))
        .route("/api-docs/openapi.json", web::get().to(openapi_json));
}

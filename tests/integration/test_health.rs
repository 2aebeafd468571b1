use crate::common::*;

#[actix_web::test]
async fn test_health_check() {
    let app = test_service!();

    let resp = get(&app, "/health").await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_root_banner() {
    let app = test_service!();

    let resp = get(&app, "/").await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["message"], "API is running");
}

#[actix_web::test]
async fn test_metrics_count_rejections() {
    let app = test_service!();

    // make sure at least one path failure has been counted
    let resp = get(&app, "/users/abc").await;
    assert_eq!(resp.status(), 422);
    // request metrics are recorded once the body has been streamed
    actix_web::test::read_body(resp).await;

    let resp = get(&app, "/metrics").await;
    assert!(resp.status().is_success());
    let body = actix_web::test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("validation_failures_total{source=\"path\"}"));
    // per-route request metrics from the middleware share the registry
    assert!(text.contains("http_requests_total"));
}

#[actix_web::test]
async fn test_metrics_endpoint_absent_when_disabled() {
    let app = actix_web::test::init_service(
        actix_web::App::new()
            .wrap(validation_contract::metrics::request_metrics(false))
            .configure(validation_contract::handlers::configure_routes),
    )
    .await;

    let resp = get(&app, "/metrics").await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    let resp = get(&app, "/health").await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_openapi_document_describes_envelope() {
    let app = test_service!();

    let resp = get(&app, "/api-docs/openapi.json").await;
    assert!(resp.status().is_success());

    let doc: serde_json::Value = actix_web::test::read_body_json(resp).await;
    let schemas = &doc["components"]["schemas"];
    assert!(schemas["ErrorEnvelope"].is_object());
    assert!(schemas["NormalizedDetail"]["properties"]["type"].is_object());
    assert!(doc["paths"]["/users/{user_id}"]["get"].is_object());
}

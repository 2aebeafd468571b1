use crate::common::*;

use actix_web::{App, HttpResponse, test, web};
use serde::Deserialize;
use validation_contract::RequestValidationError;
use validation_contract::error::combine;
use validation_contract::validation::{ValidatedHeaders, ValidatedQuery};

#[derive(Deserialize)]
struct TokenHeaders {
    x_token: String,
}

#[derive(Deserialize)]
struct Paging {
    limit: u32,
}

async fn items(
    headers: Result<ValidatedHeaders<TokenHeaders>, RequestValidationError>,
    query: Result<ValidatedQuery<Paging>, RequestValidationError>,
) -> Result<HttpResponse, RequestValidationError> {
    let (headers, query) = combine(headers, query)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "token": headers.x_token,
        "limit": query.limit,
    })))
}

macro_rules! header_service {
    () => {
        test::init_service(App::new().route("/items", web::get().to(items))).await
    };
}

#[actix_web::test]
async fn test_missing_header_location() {
    let app = header_service!();

    let resp = get(&app, "/items?limit=5").await;
    let envelope = assert_422_contract(resp).await;
    assert_eq!(fields(&envelope), vec!["header.x_token"]);
    assert_eq!(envelope.error.details[0].kind, "missing");
}

#[actix_web::test]
async fn test_header_and_query_errors_together() {
    let app = header_service!();

    let resp = get(&app, "/items?limit=-1").await;
    let envelope = assert_422_contract(resp).await;
    assert_eq!(fields(&envelope), vec!["header.x_token", "query.limit"]);
}

#[actix_web::test]
async fn test_valid_headers() {
    let app = header_service!();

    let req = test::TestRequest::get()
        .uri("/items?limit=5")
        .insert_header(("X-Token", "abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token"], "abc");
    assert_eq!(body["limit"], 5);
}

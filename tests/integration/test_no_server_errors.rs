use crate::common::*;

use actix_web::http::header::ContentType;
use actix_web::test::TestRequest;

/// None of these malformed requests may surface as a 5xx.
#[actix_web::test]
async fn test_no_500_errors() {
    let app = test_service!();

    let requests = vec![
        TestRequest::post()
            .uri("/test")
            .insert_header(ContentType::json())
            .set_payload("invalid json"),
        TestRequest::post()
            .uri("/test-model")
            .set_json(serde_json::json!({"age": "not_a_number"})),
        TestRequest::get().uri("/users/not_an_int?limit=abc"),
        TestRequest::post()
            .uri("/test-model")
            .insert_header(ContentType::json())
            .set_payload(vec![0xff, 0xfe, 0x00]),
        TestRequest::post()
            .uri("/test-model")
            .insert_header(ContentType::json())
            .set_payload("null"),
        TestRequest::post()
            .uri("/test-model")
            .insert_header(ContentType::json())
            .set_payload(r#"{"name": "a", "age": 1, "items": [{"name": "b"}], "extra": {"deep": [1, {"x": null}]}}}"#),
        TestRequest::get().uri("/users/%FF%FE?limit=%00"),
        TestRequest::get().uri("/users/99999999999999999999999"),
    ];

    for req in requests {
        let req = req.to_request();
        let uri = req.uri().to_string();
        let resp = actix_web::test::call_service(&app, req).await;
        assert!(
            resp.status().as_u16() < 500,
            "Got {} for {}",
            resp.status(),
            uri
        );
    }
}

/// Every 422 produced by the routes follows the envelope contract.
#[actix_web::test]
async fn test_every_rejection_uses_envelope() {
    let app = test_service!();

    let uris = [
        "/users/abc",
        "/users/1?limit=1.5",
        "/users/99999999999999999999999",
    ];
    for uri in uris {
        let resp = get(&app, uri).await;
        assert_422_contract(resp).await;
    }
}

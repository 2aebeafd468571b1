use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::test::TestRequest;
use validation_contract::ErrorEnvelope;

/// Assert the response is a 422 carrying the validation envelope and return it.
pub async fn assert_422_contract<B>(resp: ServiceResponse<B>) -> ErrorEnvelope
where
    B: MessageBody,
{
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    let error = &body["error"];
    assert_eq!(error["code"], 422);
    assert_eq!(error["message"], "Validation Error");

    let details = error["details"]
        .as_array()
        .expect("details must be an array");
    assert!(!details.is_empty(), "details must not be empty");
    for detail in details {
        let mut keys: Vec<&str> = detail
            .as_object()
            .expect("detail must be an object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["field", "message", "type"]);
    }

    serde_json::from_value(body).expect("envelope must deserialize")
}

/// Fields of every detail, in response order.
pub fn fields(envelope: &ErrorEnvelope) -> Vec<&str> {
    envelope
        .error
        .details
        .iter()
        .map(|d| d.field.as_str())
        .collect()
}

/// POST a raw body declared as JSON.
pub async fn post_raw_json<S, B>(app: &S, uri: &str, body: &'static str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = TestRequest::post()
        .uri(uri)
        .insert_header(ContentType::json())
        .set_payload(body)
        .to_request();
    actix_web::test::call_service(app, req).await
}

/// POST a JSON value.
pub async fn post_json<S, B>(app: &S, uri: &str, body: serde_json::Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = TestRequest::post().uri(uri).set_json(body).to_request();
    actix_web::test::call_service(app, req).await
}

/// GET a URI.
pub async fn get<S, B>(app: &S, uri: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = TestRequest::get().uri(uri).to_request();
    actix_web::test::call_service(app, req).await
}

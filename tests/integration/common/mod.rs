#[allow(unused)]
mod assertions;

#[allow(unused)]
pub use assertions::*;

/// Macro to create the test actix-web service with the application's routes.
/// Usage: `let app = test_service!();`
macro_rules! test_service {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(validation_contract::metrics::request_metrics(true))
                .configure(validation_contract::validation::configure_extractors(
                    validation_contract::config::LimitsConfig::default().json_payload_bytes,
                ))
                .configure(validation_contract::handlers::configure_routes),
        )
        .await
    };
}

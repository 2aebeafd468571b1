//! Validation contract HTTP server.
//!
//! Every request that fails validation is answered with status 422 and a
//! single JSON error envelope, whatever part of the request was at fault.

use actix_web::{App, HttpServer, middleware, web};
use validation_contract::{config::Config, handlers, metrics, validation};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return Err(std::io::Error::other(e));
        }
    };

    metrics::init_metrics();

    let payload_limit = config.limits.json_payload_bytes;
    let metrics_enabled = config.observability.metrics_enabled;

    log::info!(
        "starting HTTP server at http://{}:{}",
        config.host,
        config.port
    );
    log::info!(
        "Body limit {} bytes, metrics {}",
        payload_limit,
        if metrics_enabled { "enabled" } else { "disabled" }
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(payload_limit))
            .wrap(metrics::request_metrics(metrics_enabled))
            .wrap(middleware::Logger::default())
            .configure(validation::configure_extractors(payload_limit))
            .configure(handlers::configure_routes)
    });

    if config.workers > 0 {
        server = server.workers(config.workers);
    }

    server
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

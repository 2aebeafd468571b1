//! Prometheus metrics for request validation.
//!
//! Counters are recorded by the validation layer when it rejects a request.
//! Per-route request counts and latencies come from the `actix-web-prometheus`
//! middleware, which also serves the whole registry on `/metrics`.

use actix_web::middleware::Condition;
use actix_web_prometheus::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::LazyLock;

use crate::validation::RawError;

/// Global metrics registry
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Requests rejected, by the request section whose extraction failed
pub static VALIDATION_FAILURES_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    let counter = IntCounterVec::new(
        Opts::new(
            "validation_failures_total",
            "Number of requests rejected by validation",
        ),
        &["source"],
    )
    .expect("metric can be created");
    REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

/// Individual validation errors, by source and error kind
pub static VALIDATION_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    let counter = IntCounterVec::new(
        Opts::new(
            "validation_errors_total",
            "Number of validation errors reported in 422 responses",
        ),
        &["source", "type"],
    )
    .expect("metric can be created");
    REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

/// Record one rejected extraction and its errors
pub fn record_validation_failure(source: &str, errors: &[RawError]) {
    VALIDATION_FAILURES_TOTAL.with_label_values(&[source]).inc();
    for error in errors {
        VALIDATION_ERRORS_TOTAL
            .with_label_values(&[source, error.kind()])
            .inc();
    }
}

/// Request metrics middleware bound to [`REGISTRY`]. Built once: its
/// collectors can only be registered a single time.
pub static REQUEST_METRICS: LazyLock<PrometheusMetrics> = LazyLock::new(|| {
    PrometheusMetricsBuilder::new("api")
        .registry(REGISTRY.clone())
        .endpoint("/metrics")
        .build()
        .expect("request metrics can be created")
});

/// Middleware recording per-route request metrics and serving `/metrics`.
/// When disabled the endpoint is not mounted; validation counters are still
/// recorded.
pub fn request_metrics(enabled: bool) -> Condition<PrometheusMetrics> {
    Condition::new(enabled, REQUEST_METRICS.clone())
}

/// Initialize all metrics (call at startup to register them)
pub fn init_metrics() {
    // Force lazy initialization of all metrics
    let _ = &*VALIDATION_FAILURES_TOTAL;
    let _ = &*VALIDATION_ERRORS_TOTAL;
    let _ = &*REQUEST_METRICS;
}

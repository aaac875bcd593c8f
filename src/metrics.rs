//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

/// Global Prometheus handle reused in tests.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("intake")
        .endpoint("/metrics") // exposed URL
        .build()
        .expect("metrics builder")
});

/// Accepted registrations, labelled by event type.
pub static REGISTRATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new("registrations_total", "Registrations accepted, by event"),
        &["event"],
    )
    .expect("registrations counter");
    METRICS
        .registry
        .register(Box::new(counter.clone()))
        .expect("register registrations counter");
    counter
});

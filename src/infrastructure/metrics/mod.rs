//! Prometheus Metrics Module
//!
//! # Metrics Collected
//! - Thread view counts by outcome (`found`, `not_found`, `error`)
//! - Thread aggregation latency histogram

use once_cell::sync::Lazy;
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Thread detail requests by outcome
pub static THREAD_VIEWS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("thread_views_total", "Total number of thread detail requests").namespace("forum_api"),
        &["outcome"],
    )
    .expect("Failed to create THREAD_VIEWS_TOTAL metric")
});

/// Time spent building a thread view, gate included
pub static THREAD_AGGREGATION_DURATION_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    let buckets = vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];
    Histogram::with_opts(
        HistogramOpts::new(
            "thread_aggregation_duration_seconds",
            "Thread aggregation latency in seconds",
        )
        .namespace("forum_api")
        .buckets(buckets),
    )
    .expect("Failed to create THREAD_AGGREGATION_DURATION_SECONDS metric")
});

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(THREAD_VIEWS_TOTAL.clone()))
        .expect("Failed to register THREAD_VIEWS_TOTAL");
    registry
        .register(Box::new(THREAD_AGGREGATION_DURATION_SECONDS.clone()))
        .expect("Failed to register THREAD_AGGREGATION_DURATION_SECONDS");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Record one thread view and how long it took
pub fn record_thread_view(outcome: &str, duration_secs: f64) {
    THREAD_VIEWS_TOTAL.with_label_values(&[outcome]).inc();
    THREAD_AGGREGATION_DURATION_SECONDS.observe(duration_secs);
}

//! Prometheus metrics for the HTTP surface
//!
//! All metrics use the `juapesa_` prefix.

use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

const LATENCY_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Completed requests by method, route and status
    pub http_requests_total: IntCounterVec,
    /// Request latency in seconds by method and route
    pub http_request_duration_seconds: HistogramVec,
    /// Requests currently being served
    pub http_requests_in_flight: IntGauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("juapesa_http_requests_total", "Total HTTP requests served"),
            &["method", "path", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "juapesa_http_request_duration_seconds",
                "HTTP request latency in seconds",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
            &["method", "path"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        let http_requests_in_flight = IntGauge::with_opts(Opts::new(
            "juapesa_http_requests_in_flight",
            "HTTP requests currently in flight",
        ))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
        })
    }

    /// Record one finished request
    pub fn observe_request(&self, method: &str, path: &str, status: u16, seconds: f64) {
        self.http_requests_total
            .with_label_values(&[method, path, &status.to_string()])
            .inc();
        self.http_request_duration_seconds
            .with_label_values(&[method, path])
            .observe(seconds);
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        encoder.encode_to_string(&families).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to encode metrics");
            String::new()
        })
    }
}

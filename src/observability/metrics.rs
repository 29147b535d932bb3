//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sysfas_requests_total` (counter): requests by route and status
//! - `sysfas_data_load_duration_seconds` (histogram): file read + parse time by resource
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade and is a no-op until an
//!   exporter is installed
//! - The Prometheus exporter runs on its own listener, off the main router

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count a handled request.
pub fn record_request(route: &'static str, status: u16) {
    metrics::counter!(
        "sysfas_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record how long loading a resource file took.
pub fn record_load(resource: &'static str, start: Instant) {
    metrics::histogram!("sysfas_data_load_duration_seconds", "resource" => resource)
        .record(start.elapsed().as_secs_f64());
}

// crates/server/src/metrics.rs
//! Application metrics for Prometheus monitoring.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// Called once at application startup, before any metrics are recorded.
/// Returns `true` if initialization succeeded, `false` if already initialized.
pub fn init_metrics() -> bool {
    if PROMETHEUS_HANDLE.get().is_some() {
        return false;
    }

    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    if metrics::set_global_recorder(recorder).is_err() {
        tracing::warn!("Failed to set global metrics recorder (already set)");
        return false;
    }

    if PROMETHEUS_HANDLE.set(handle).is_err() {
        tracing::warn!("Failed to store Prometheus handle (already set)");
    }

    describe_metrics();

    tracing::info!("Prometheus metrics initialized");
    true
}

/// Describe all application metrics for Prometheus.
fn describe_metrics() {
    describe_counter!(
        "devwell_requests_total",
        "Total number of API requests by endpoint and status"
    );
    describe_histogram!(
        "devwell_request_duration_seconds",
        "Duration of API requests in seconds"
    );
    describe_counter!(
        "devwell_logs_recorded_total",
        "Wellness log entries recorded, by category"
    );
}

/// Render current metrics in Prometheus text format.
///
/// Returns `None` if metrics are not initialized.
pub fn render_metrics() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|h| h.render())
}

/// Record a completed API request.
pub fn record_request(endpoint: &str, status: &str, duration: std::time::Duration) {
    counter!("devwell_requests_total", "endpoint" => endpoint.to_string(), "status" => status.to_string())
        .increment(1);
    histogram!("devwell_request_duration_seconds", "endpoint" => endpoint.to_string())
        .record(duration.as_secs_f64());
}

/// Record one accepted wellness log entry.
pub fn record_log_entry(category: &'static str) {
    counter!("devwell_logs_recorded_total", "category" => category).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_helpers_do_not_panic() {
        init_metrics();
        record_request("dashboard_stats", "200", std::time::Duration::from_millis(3));
        record_log_entry("mood");
        assert!(render_metrics().is_some());
    }
}

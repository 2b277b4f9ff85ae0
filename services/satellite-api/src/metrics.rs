//! Request metrics.
//!
//! Recorded through the `metrics` facade; they only go anywhere once a
//! Prometheus recorder is installed by the binary.

use metrics::{counter, histogram};
use std::time::Instant;

/// Times one request to a data endpoint.
pub struct RequestTimer {
    endpoint: &'static str,
    start: Instant,
}

impl RequestTimer {
    pub fn start(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            start: Instant::now(),
        }
    }

    /// Record the outcome and duration.
    pub fn finish(self, success: bool) {
        let status = if success { "ok" } else { "error" };

        counter!(
            "satellite_api_requests_total",
            "endpoint" => self.endpoint,
            "status" => status
        )
        .increment(1);
        histogram!(
            "satellite_api_request_duration_seconds",
            "endpoint" => self.endpoint
        )
        .record(self.start.elapsed().as_secs_f64());
    }
}

//! Metrics for the retrieval pipeline.
//!
//! Recording is a no-op until a recorder is installed, so these calls are
//! safe in tests and in deployments without an exporter.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Metric names for the retrieval pipeline.
pub mod names {
    /// Reads answered from the cache.
    pub const CACHE_HITS_TOTAL: &str = "reestr_cache_hits_total";
    /// Reads that found no cached dataset.
    pub const CACHE_MISSES_TOTAL: &str = "reestr_cache_misses_total";
    /// Cache operations that failed because the backend was unreachable.
    pub const CACHE_UNAVAILABLE_TOTAL: &str = "reestr_cache_unavailable_total";
    /// Dataset writes refused by the cache for lack of capacity.
    pub const CACHE_WRITES_REJECTED_TOTAL: &str = "reestr_cache_writes_rejected_total";

    /// Completed fetches from the upstream registry.
    pub const UPSTREAM_FETCHES_TOTAL: &str = "reestr_upstream_fetches_total";
    /// Failed fetches from the upstream registry.
    pub const UPSTREAM_FAILURES_TOTAL: &str = "reestr_upstream_failures_total";
    /// Upstream fetch duration in seconds.
    pub const UPSTREAM_FETCH_DURATION: &str = "reestr_upstream_fetch_duration_seconds";
    /// Records in the last fetched dataset.
    pub const UPSTREAM_RECORDS: &str = "reestr_upstream_records";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(names::CACHE_HITS_TOTAL, "Dataset reads answered from the cache");
    describe_counter!(names::CACHE_MISSES_TOTAL, "Dataset reads with nothing cached");
    describe_counter!(
        names::CACHE_UNAVAILABLE_TOTAL,
        "Cache operations that failed because the backend was unreachable"
    );
    describe_counter!(
        names::CACHE_WRITES_REJECTED_TOTAL,
        "Dataset writes refused by the cache backend"
    );

    describe_counter!(names::UPSTREAM_FETCHES_TOTAL, "Successful registry fetches");
    describe_counter!(names::UPSTREAM_FAILURES_TOTAL, "Failed registry fetches");
    describe_histogram!(
        names::UPSTREAM_FETCH_DURATION,
        "Registry fetch duration in seconds"
    );
    describe_histogram!(names::UPSTREAM_RECORDS, "Records returned by the registry");
}

/// Pipeline metrics recorder.
#[derive(Clone)]
pub struct PipelineMetrics;

impl PipelineMetrics {
    /// Record a cache hit.
    pub fn cache_hit(key: &str) {
        counter!(names::CACHE_HITS_TOTAL, "key" => key.to_string()).increment(1);
    }

    /// Record a cache miss.
    pub fn cache_miss(key: &str) {
        counter!(names::CACHE_MISSES_TOTAL, "key" => key.to_string()).increment(1);
    }

    /// Record an unreachable cache.
    pub fn cache_unavailable(key: &str, operation: &'static str) {
        counter!(
            names::CACHE_UNAVAILABLE_TOTAL,
            "key" => key.to_string(),
            "operation" => operation
        )
        .increment(1);
    }

    /// Record a refused write.
    pub fn cache_write_rejected(key: &str) {
        counter!(names::CACHE_WRITES_REJECTED_TOTAL, "key" => key.to_string()).increment(1);
    }

    /// Record a successful fetch.
    pub fn upstream_fetched(records: usize, duration: Duration) {
        counter!(names::UPSTREAM_FETCHES_TOTAL).increment(1);
        histogram!(names::UPSTREAM_FETCH_DURATION, "status" => "success")
            .record(duration.as_secs_f64());
        histogram!(names::UPSTREAM_RECORDS).record(records as f64);
    }

    /// Record a failed fetch.
    pub fn upstream_failed(error_code: &'static str, duration: Duration) {
        counter!(names::UPSTREAM_FAILURES_TOTAL, "error_code" => error_code).increment(1);
        histogram!(names::UPSTREAM_FETCH_DURATION, "status" => "failure")
            .record(duration.as_secs_f64());
    }
}

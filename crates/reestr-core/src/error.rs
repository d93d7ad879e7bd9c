//! Unified error types for all layers of the directory.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Reestr directory.
///
/// Upstream variants are the only ones a reader ever sees; the cache variants
/// are produced by the cache adapter and absorbed by the retrieval layer.
#[derive(Error, Debug)]
pub enum ReestrError {
    // ============ Normalization Errors ============
    /// A raw upstream record is missing a required field.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    // ============ Upstream Errors ============
    /// The registry could not be reached, timed out, or answered with a
    /// non-success status.
    #[error("Upstream registry unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The registry answered, but the body is not the expected shape.
    #[error("Upstream registry returned a malformed response: {0}")]
    UpstreamMalformedResponse(String),

    // ============ Cache Errors ============
    /// The cache backend could not be reached or timed out.
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// The cache backend refused a write because it is out of capacity.
    #[error("Cache write rejected: {0}")]
    CacheWriteRejected(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReestrError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UpstreamMalformedResponse(_) | Self::MalformedRecord(_) => 502,
            Self::UpstreamUnavailable(_) => 503,
            Self::CacheUnavailable(_)
            | Self::CacheWriteRejected(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRecord(_) => "MALFORMED_RECORD",
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::UpstreamMalformedResponse(_) => "UPSTREAM_MALFORMED_RESPONSE",
            Self::CacheUnavailable(_) => "CACHE_UNAVAILABLE",
            Self::CacheWriteRejected(_) => "CACHE_WRITE_REJECTED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an upstream-unavailable error.
    #[must_use]
    pub fn upstream_unavailable<T: Into<String>>(message: T) -> Self {
        Self::UpstreamUnavailable(message.into())
    }

    /// Creates an upstream-malformed-response error.
    #[must_use]
    pub fn upstream_malformed<T: Into<String>>(message: T) -> Self {
        Self::UpstreamMalformedResponse(message.into())
    }

    /// Creates a cache-unavailable error.
    #[must_use]
    pub fn cache_unavailable<T: Into<String>>(message: T) -> Self {
        Self::CacheUnavailable(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// True for failures that make a single read fail.
    ///
    /// A malformed record aborts the whole fetch, so it counts as an
    /// upstream failure too.
    #[must_use]
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable(_)
                | Self::UpstreamMalformedResponse(_)
                | Self::MalformedRecord(_)
        )
    }
}

impl From<serde_json::Error> for ReestrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `ReestrError`.
    #[must_use]
    pub fn from_error(error: &ReestrError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&ReestrError> for ErrorResponse {
    fn from(error: &ReestrError) -> Self {
        Self::from_error(error)
    }
}

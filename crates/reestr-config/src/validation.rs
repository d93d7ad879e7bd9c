//! Configuration validation module.
//!
//! Checks every configuration value before the server starts and reports all
//! problems at once instead of failing on the first request.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size is outside the allowed range.
    InvalidPoolSize { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
    /// The dataset cache key is empty.
    EmptyCacheKey,
    /// Log level is invalid.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { value, maximum } => {
                write!(f, "Invalid pool size {} (must be 1-{})", value, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveTimeout { name } => {
                write!(f, "Timeout '{}' must be positive", name)
            }
            Self::EmptyCacheKey => write!(f, "Redis cache key cannot be empty"),
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_redis(&config.redis, &mut errors);
        Self::validate_registry(&config.registry, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &crate::ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }
        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
            });
        }
    }

    fn validate_redis(config: &crate::RedisConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.key.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyCacheKey);
        }

        // The remaining settings only matter when talking to a real backend.
        if !config.enabled {
            return;
        }

        if !config.url.starts_with("redis://") && !config.url.starts_with("rediss://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            });
        }
        if config.pool_size == 0 || config.pool_size > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::InvalidPoolSize {
                value: config.pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
        if config.operation_timeout_ms == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "redis.operation_timeout_ms".to_string(),
            });
        }
    }

    fn validate_registry(config: &crate::RegistryConfig, errors: &mut Vec<ConfigValidationError>) {
        match Url::parse(&config.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "registry".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "registry".to_string(),
                message: e.to_string(),
            }),
        }

        if config.timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "registry.timeout_secs".to_string(),
            });
        }
        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "registry.connect_timeout_secs".to_string(),
            });
        }
    }

    fn validate_observability(
        config: &crate::ObservabilityConfig,
        errors: &mut Vec<ConfigValidationError>,
    ) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error_at_once() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.redis.url = "http://localhost:6379".to_string();
        config.observability.log_level = "loud".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ConfigValidationError::InvalidLogLevel {
            value: "loud".to_string()
        }));
    }

    #[test]
    fn test_disabled_redis_skips_url_check() {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config.redis.url = "not-a-url".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_empty_cache_key_rejected_even_when_disabled() {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config.redis.key = "  ".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::EmptyCacheKey]);
    }

    #[test]
    fn test_registry_url_must_be_http() {
        let mut config = AppConfig::default();
        config.registry.url = "ftp://registry.example/objects".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(
            &errors[0],
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "registry"
        ));
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let mut config = AppConfig::default();
        config.registry.timeout_secs = 0;
        config.redis.operation_timeout_ms = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ConfigValidationError::NonPositiveTimeout { .. })));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigValidationError::InvalidPoolSize { value: 0, maximum: 1000 };
        assert_eq!(err.to_string(), "Invalid pool size 0 (must be 1-1000)");
    }
}
